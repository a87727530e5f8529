//! Log listing query
//!
//! Every filter adds one `AND` clause; multi-valued filters are OR-combined
//! inside their clause.

use chrono::DateTime;
use panel_core::{LogFilter, PageRequest, TextMatch};
use sqlx::{Postgres, QueryBuilder};

const LOG_COLUMNS: &str = "id, identifier, action, details, metadata, timestamp";

/// Build the filtered, paginated log query
pub fn build_log_query(filter: &LogFilter, page: PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {LOG_COLUMNS} FROM user_logs WHERE TRUE"));

    if !filter.identifiers.is_empty() {
        query.push(" AND identifier IN (");
        let mut values = query.separated(", ");
        for identifier in &filter.identifiers {
            values.push_bind(identifier.clone());
        }
        values.push_unseparated(")");
    }

    if let Some(before) = filter.before.and_then(|secs| DateTime::from_timestamp(secs, 0)) {
        query.push(" AND timestamp < ").push_bind(before);
    }

    if let Some(after) = filter.after.and_then(|secs| DateTime::from_timestamp(secs, 0)) {
        query.push(" AND timestamp > ").push_bind(after);
    }

    if !filter.servers.is_empty() {
        query.push(" AND (");
        for (i, server) in filter.servers.iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            query
                .push("details LIKE ")
                .push_bind(format!("% [{server}] %"));
        }
        query.push(")");
    }

    if !filter.actions.is_empty() {
        query.push(" AND (");
        for (i, action) in filter.actions.iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            push_text_match(&mut query, "action", action);
        }
        query.push(")");
    }

    if let Some(details) = &filter.details {
        query.push(" AND ");
        push_text_match(&mut query, "details", details);
    }

    query
        .push(" ORDER BY timestamp DESC, id DESC LIMIT ")
        .push_bind(page.fetch_limit())
        .push(" OFFSET ")
        .push_bind(page.offset());

    query
}

fn push_text_match(query: &mut QueryBuilder<'static, Postgres>, column: &str, text: &TextMatch) {
    match text {
        TextMatch::Exact(value) => {
            query.push(column).push(" = ").push_bind(value.clone());
        }
        TextMatch::Contains(value) => {
            query
                .push(column)
                .push(" ILIKE ")
                .push_bind(format!("%{value}%"));
        }
    }
}
