//! Hierarchical name handling.
//!
//! Fully-scoped names are dot-separated paths such as `top.u_core.data_q`.
//! The final component is the leaf name.

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between hierarchy levels.
pub const SEPARATOR: char = '.';

lazy_static! {
    // Temporaries introduced by Verilator during elaboration.
    static ref TEMPORARY_RE: Regex = Regex::new(r"__V(dly|cell|conc)").unwrap();
    static ref LVBOUND_RE: Regex = Regex::new(r"__Vlvbound").unwrap();
}

/// Returns the final component of a hierarchical name.
pub fn leaf_name(name: &str) -> &str {
    name.rsplit(SEPARATOR).next().unwrap_or(name)
}

/// Returns the scope part of a hierarchical name, if any.
pub fn scope_of(name: &str) -> Option<&str> {
    name.rsplit_once(SEPARATOR).map(|(scope, _)| scope)
}

/// Joins a scope path and a name.
pub fn join(scope: &[String], name: &str) -> String {
    if scope.is_empty() {
        return name.to_string();
    }
    let mut full = scope.join(".");
    full.push(SEPARATOR);
    full.push_str(name);
    full
}

/// True when `name` has more than one segment.
pub fn is_qualified(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Number of hierarchy levels in a name (`top.x` has depth 2).
pub fn depth(name: &str) -> usize {
    name.split(SEPARATOR).count()
}

/// True for names Verilator invents for delayed assignments, cell ports and
/// concatenations. These are hidden from name listings.
pub fn is_temporary(name: &str) -> bool {
    TEMPORARY_RE.is_match(name)
}

/// True for Verilator's inlined-task bound variables, which can merge
/// otherwise independent paths.
pub fn is_lvbound(name: &str) -> bool {
    LVBOUND_RE.is_match(name)
}

/// A valid identifier segment is non-empty and does not contain the
/// hierarchy separator.
pub fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn leaf_and_scope() {
        assert_eq!(leaf_name("top.u_sub.sig"), "sig");
        assert_eq!(leaf_name("sig"), "sig");
        assert_eq!(scope_of("top.u_sub.sig"), Some("top.u_sub"));
        assert_eq!(scope_of("sig"), None);
    }

    #[test]
    fn join_scopes() {
        let scope = vec!["top".to_string(), "g_stage[0]".to_string()];
        assert_eq!(join(&scope, "data_q"), "top.g_stage[0].data_q");
        assert_eq!(join(&[], "data_q"), "data_q");
    }

    #[test]
    fn temporaries() {
        assert!(is_temporary("top.__Vdly__counter_q"));
        assert!(is_temporary("top.__Vcellinp__u_sub__i_a"));
        assert!(!is_temporary("top.counter_q"));
        assert!(is_lvbound("top.__Vlvbound1"));
    }

    quickcheck! {
        fn join_then_leaf_is_identity(scope: Vec<String>, name: String) -> bool {
            let scope: Vec<String> = scope.into_iter().filter(|s| is_valid_segment(s)).collect();
            if !is_valid_segment(&name) {
                return true;
            }
            let full = join(&scope, &name);
            leaf_name(&full) == name && depth(&full) == scope.len() + 1
        }
    }
}
