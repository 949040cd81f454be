//! Built-in payloads for capabilities the backend no longer serves.

use serde_json::{json, Value};

pub fn sync_games() -> Value {
    json!({
        "success": true,
        "message": "Data refreshed from source APIs"
    })
}

pub fn status() -> Value {
    json!({
        "status": "ok",
        "version": "2.0.0-serverless",
        "cache_loaded": { "NHL": true, "AHL": true, "LIIGA": true }
    })
}

pub fn leagues() -> Value {
    json!({
        "leagues": [
            { "code": "NHL", "name": "NHL", "name_ru": "НХЛ", "cached": true },
            { "code": "AHL", "name": "AHL", "name_ru": "АХЛ", "cached": true },
            { "code": "LIIGA", "name": "Liiga", "name_ru": "Лиига (Финляндия)", "cached": true }
        ]
    })
}

pub fn team_news() -> Value {
    json!({ "articles": [] })
}
