//! Request identifiers of the form `REQ-<unix_seconds>-<0..9999>`.
//!
//! Ids sort by arrival second and are easy to grep for. Two requests in the same second
//! can collide; ids are for tracing only and nothing keys on them.

use crate::model::RequestContext;
use chrono::Utc;
use rand::Rng;

pub const REQUEST_ID_PREFIX: &str = "REQ";

/// Exclusive upper bound of the random disambiguator.
const DISAMBIGUATOR_RANGE: u32 = 10_000;

pub fn new_id() -> String {
    let seconds = Utc::now().timestamp();
    let disambiguator = rand::thread_rng().gen_range(0..DISAMBIGUATOR_RANGE);
    format!("{REQUEST_ID_PREFIX}-{seconds}-{disambiguator}")
}

/// Opens the context for a new request.
pub fn begin() -> RequestContext {
    RequestContext::new(new_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(id: &str) -> (String, i64, u32) {
        let mut split = id.splitn(3, '-');
        let prefix = split.next().unwrap().to_string();
        let seconds = split.next().unwrap().parse().unwrap();
        let disambiguator = split.next().unwrap().parse().unwrap();
        (prefix, seconds, disambiguator)
    }

    #[test]
    fn test_new_id_format() {
        let before = Utc::now().timestamp();
        let id = new_id();
        let after = Utc::now().timestamp();

        let (prefix, seconds, disambiguator) = parts(&id);
        assert_eq!(prefix, "REQ");
        assert!(seconds >= before && seconds <= after);
        assert!(disambiguator < DISAMBIGUATOR_RANGE);
    }

    #[test]
    fn test_disambiguator_stays_in_range() {
        for _ in 0..1_000 {
            let (_, _, disambiguator) = parts(&new_id());
            assert!(disambiguator < DISAMBIGUATOR_RANGE);
        }
    }

    #[test]
    fn test_begin_uses_fresh_id() {
        let ctx = begin();
        assert!(ctx.request_id.starts_with("REQ-"));
        assert!(ctx.started_at <= Utc::now());
    }
}
