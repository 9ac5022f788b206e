// src/db/plans.rs
use crate::errors::ServerError;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub code: String,
    pub name: String,
    pub price_cents: i64,
    pub billing_interval: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

impl Plan {
    /// "$29" / "$29.50" / "Free".
    pub fn display_price(&self) -> String {
        if self.price_cents == 0 {
            return "Free".to_string();
        }
        let dollars = self.price_cents / 100;
        match self.price_cents % 100 {
            0 => format!("${dollars}"),
            cents => format!("${dollars}.{cents:02}"),
        }
    }
}

pub fn list_plans(conn: &Connection) -> Result<Vec<Plan>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select code, name, price_cents, billing_interval, features, highlighted
            from plans
            order by sort_order, price_cents
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare plans failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            let features: String = row.get(4)?;
            Ok(Plan {
                code: row.get(0)?,
                name: row.get(1)?,
                price_cents: row.get(2)?,
                billing_interval: row.get(3)?,
                features: features
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
                highlighted: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query plans failed: {e}")))?;

    let mut plans = Vec::new();
    for r in rows {
        plans.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::auth::tests::memory_conn;

    #[test]
    fn seeded_plans_are_listed_in_order() {
        let conn = memory_conn();
        let plans = list_plans(&conn).unwrap();
        let codes: Vec<_> = plans.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["basic", "pro", "agency"]);
        assert!(plans[1].highlighted);
        assert_eq!(plans[1].features.len(), 4);
    }

    #[test]
    fn display_price_formats_cents() {
        let mut p = Plan {
            code: "x".into(),
            name: "X".into(),
            price_cents: 0,
            billing_interval: "month".into(),
            features: vec![],
            highlighted: false,
        };
        assert_eq!(p.display_price(), "Free");
        p.price_cents = 2900;
        assert_eq!(p.display_price(), "$29");
        p.price_cents = 2950;
        assert_eq!(p.display_price(), "$29.50");
    }
}
