use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an amount in centavos as Brazilian reais: R$ 1.234,56
pub fn money(minor_units: i64) -> String {
    let negative = minor_units < 0;
    let abs = minor_units.unsigned_abs();
    let int_part = (abs / 100).to_string();
    let dec_part = abs % 100;

    let mut with_dots = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_dots.push('.');
        }
        with_dots.push(c);
    }
    let with_dots: String = with_dots.chars().rev().collect();

    if negative {
        format!("-R$ {with_dots},{dec_part:02}")
    } else {
        format!("R$ {with_dots},{dec_part:02}")
    }
}

/// Left-pad an id with zeros to `width` digits. Longer ids are kept whole.
pub fn zero_pad(id: u64, width: usize) -> String {
    format!("{id:0width$}")
}

/// Parse the timestamp shapes the production API hands out.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn date_br(ts: &NaiveDateTime) -> String {
    ts.format("%d/%m/%Y").to_string()
}

pub fn timestamp_br(ts: &NaiveDateTime) -> String {
    ts.format("%d/%m/%Y %H:%M:%S").to_string()
}
