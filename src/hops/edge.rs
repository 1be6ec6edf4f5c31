use super::Hop;
use itertools::Itertools;
use std::fmt;

/// Two adjacent addresses in the hop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub left: &'a str,
    pub right: &'a str,
}

// DOT edge-list syntax. Quotes inside addresses are passed through as is.
impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -- \"{}\"", self.left, self.right)
    }
}

/// Pairs `(hops[i], hops[i+1])` for `i` in `1..=n-2`, dropping any pair
/// that touches a blocked slot. The first hop never starts a pair.
pub fn edges(hops: &[Hop]) -> impl Iterator<Item = Edge<'_>> {
    hops.iter()
        .skip(1)
        .tuple_windows()
        .filter_map(|(a, b)| match (a.address(), b.address()) {
            (Some(left), Some(right)) => Some(Edge { left, right }),
            _ => None,
        })
}

/// Newline-joined edge list without a trailing newline.
pub fn render(hops: &[Hop]) -> String {
    edges(hops).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hops::read_hops;

    fn seq(v: &[&str]) -> Vec<Hop> {
        v.iter()
            .map(|s| match *s {
                "#" => Hop::Blocked,
                a => Hop::Address(a.to_string()),
            })
            .collect()
    }

    #[test]
    fn test_edge_display() {
        let e = Edge {
            left: "10.0.0.1",
            right: "a\"b",
        };
        assert_eq!(e.to_string(), "\"10.0.0.1\" -- \"a\"b\"");
    }

    #[test]
    fn test_short_sequences() {
        assert_eq!(render(&seq(&[])), "");
        assert_eq!(render(&seq(&["A"])), "");
        // length 2 has an empty range
        assert_eq!(render(&seq(&["A", "B"])), "");
    }

    #[test]
    fn test_three_plain_hops() {
        assert_eq!(render(&seq(&["A", "B", "C"])), "\"B\" -- \"C\"");
    }

    #[test]
    fn test_leading_header() {
        assert_eq!(render(&seq(&["#", "A", "B"])), "\"A\" -- \"B\"");
    }

    #[test]
    fn test_header_in_middle() {
        assert_eq!(render(&seq(&["A", "#", "B", "C"])), "\"B\" -- \"C\"");
    }

    #[test]
    fn test_multiple_edges() {
        let hops = seq(&["A", "B", "C", "D", "#", "E", "F"]);
        let got: Vec<_> = edges(&hops).map(|e| (e.left, e.right)).collect();
        assert_eq!(got, vec![("B", "C"), ("C", "D"), ("E", "F")]);
        assert_eq!(
            render(&hops),
            "\"B\" -- \"C\"\n\"C\" -- \"D\"\n\"E\" -- \"F\""
        );
    }

    #[test]
    fn test_all_blocked() {
        assert_eq!(render(&seq(&["#", "#", "#", "#"])), "");
    }

    #[test]
    fn test_star_shrinks_sequence() {
        let hops = read_hops("1 x A\n2 x *\n3 x C\n".as_bytes()).unwrap();
        assert_eq!(hops.len(), 2);
        assert_eq!(render(&hops), "");
    }

    #[test]
    fn test_render_is_stable() {
        let hops = seq(&["#", "A", "B", "C", "#", "D", "E"]);
        assert_eq!(render(&hops), render(&hops));
    }
}
