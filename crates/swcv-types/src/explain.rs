//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after package order examples.
    pub examples: ExamplePair,
}

/// Before and after package order examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Order that would trigger a finding.
    pub before: &'static str,
    /// Order that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_ORDER_COMPLETENESS | ids::CODE_MISSING_RANK => Some(explain_missing_rank()),
        ids::CHECK_ORDER_LAYERING | ids::CODE_UPWARD_DEPENDENCY => {
            Some(explain_upward_dependency())
        }
        ids::CHECK_TOOL_RUNTIME | ids::CODE_RUNTIME_ERROR => Some(explain_runtime_error()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_ORDER_COMPLETENESS,
        ids::CHECK_ORDER_LAYERING,
        ids::CHECK_TOOL_RUNTIME,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_RANK,
        ids::CODE_UPWARD_DEPENDENCY,
        ids::CODE_RUNTIME_ERROR,
    ]
}

fn explain_missing_rank() -> Explanation {
    Explanation {
        title: "Every Package Must Be Ranked",
        description: "\
Detects packages defined in the SWC that do not appear in the package order.

The order is only meaningful when it covers the whole library. A package with no
rank cannot be compared against anything, so validation stops before any
dependency is examined.",
        remediation: "\
Add the missing package to the package order, either as its own rank or inside
a parenthesized group with packages it may freely depend on:

    com.acme.util, (com.acme.model, com.acme.net), com.acme.ui

Use `swcv inventory <swc>` to list every package the SWC defines.",
        examples: ExamplePair {
            before: "com.acme.util, com.acme.ui",
            after: "com.acme.util, com.acme.model, com.acme.ui",
        },
    }
}

fn explain_upward_dependency() -> Explanation {
    Explanation {
        title: "No Upward Dependencies",
        description: "\
Detects a package that uses a symbol exported by a package of higher rank.

Packages listed earlier in the order are lower layers. A package may depend on
symbols from packages of the same or a lower rank only. Dependencies on symbols
the SWC does not define (for example `flash.display:Sprite` from playerglobal)
are external and never checked.

In the example below `com.acme.model` uses `com.acme.view:Renderer`.",
        remediation: "\
Either move the offending code so the dependency points downward, or, if the
layering was wrong, reorder the packages. Packages that legitimately depend on
each other belong in the same parenthesized group:

    com.acme.util, (com.acme.model, com.acme.view)",
        examples: ExamplePair {
            before: "com.acme.model, com.acme.view",
            after: "(com.acme.model, com.acme.view)",
        },
    }
}

fn explain_runtime_error() -> Explanation {
    Explanation {
        title: "Runtime Error",
        description: "\
swcv could not complete the check. Typical causes are an unreadable archive, a
SWC without a catalog.xml, a malformed catalog, or a package order that does
not parse (too many commas, an unclosed parenthesis).",
        remediation: "\
Read the finding message for the underlying cause. Run `swcv -v check ...` for
debug logging.",
        examples: ExamplePair {
            before: "com.acme.util,, (com.acme.model",
            after: "com.acme.util, (com.acme.model)",
        },
    }
}
