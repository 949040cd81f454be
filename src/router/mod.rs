//! Static route table mapping paths to lazily constructed views.

use crate::error::{HockeyError, HockeyResult};
use crate::views::{HomeView, LineupsView, OddsView, View, WinnersView};

pub type ViewLoader = fn() -> Box<dyn View>;

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    loader: ViewLoader,
}

impl Route {
    /// Construct the view; nothing is built until a route is actually visited.
    pub fn load(&self) -> Box<dyn View> {
        (self.loader)()
    }
}

fn load_home() -> Box<dyn View> {
    Box::new(HomeView)
}

fn load_winners() -> Box<dyn View> {
    Box::new(WinnersView)
}

fn load_odds() -> Box<dyn View> {
    Box::new(OddsView)
}

fn load_lineups() -> Box<dyn View> {
    Box::new(LineupsView)
}

pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        loader: load_home,
    },
    Route {
        path: "/winners",
        name: "Winners",
        loader: load_winners,
    },
    Route {
        path: "/odds",
        name: "Odds",
        loader: load_odds,
    },
    Route {
        path: "/lineups",
        name: "Lineups",
        loader: load_lineups,
    },
];

fn normalize(path: &str) -> &str {
    let trimmed = path.trim();
    if trimmed.len() > 1 {
        trimmed.trim_end_matches('/')
    } else {
        trimmed
    }
}

/// Exact-match lookup. Undeclared paths have no route.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    ROUTES.iter().find(|route| route.path == path)
}

pub fn resolve_or_err(path: &str) -> HockeyResult<&'static Route> {
    resolve(path).ok_or_else(|| HockeyError::RouteNotFound(path.to_string()))
}
