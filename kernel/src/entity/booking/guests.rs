use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GuestCount(u32);

impl GuestCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    /// Reads the integer prefix of `raw` the way a browser form field does:
    /// leading whitespace and a sign are allowed, trailing garbage is
    /// dropped. Returns `None` when there are no leading digits or the
    /// count does not fit in a `u32`. Negative values clamp to zero.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .map_or(unsigned, |end| &unsigned[..end]);
        if digits.is_empty() {
            return None;
        }
        if negative {
            return Some(Self(0));
        }
        digits.parse::<u32>().ok().map(Self)
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod test {
    use super::GuestCount;

    fn parse(raw: &str) -> Option<u32> {
        GuestCount::parse(raw).map(|count| *count.as_ref())
    }

    #[test]
    fn plain_integers() {
        assert_eq!(parse("0"), Some(0));
        assert_eq!(parse("2"), Some(2));
        assert_eq!(parse("  12"), Some(12));
        assert_eq!(parse("+3"), Some(3));
    }

    #[test]
    fn integer_prefix_wins() {
        assert_eq!(parse("3abc"), Some(3));
        assert_eq!(parse("2.9"), Some(2));
    }

    #[test]
    fn negatives_clamp_to_zero() {
        assert_eq!(parse("-1"), Some(0));
        assert_eq!(parse("-250"), Some(0));
    }

    #[test]
    fn unparseable_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("-"), None);
        assert_eq!(parse(".5"), None);
    }

    #[test]
    fn oversized_input_is_unparseable() {
        assert_eq!(parse("4294967295"), Some(u32::MAX));
        assert_eq!(parse("4294967296"), None);
        assert_eq!(parse("99999999999999999999"), None);
        assert_eq!(parse("-99999999999999999999"), Some(0));
    }

    #[test]
    fn defaults_to_one_guest() {
        assert_eq!(GuestCount::default(), GuestCount::new(1));
    }
}
