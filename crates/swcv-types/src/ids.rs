//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_ORDER_COMPLETENESS: &str = "order.completeness";
pub const CHECK_ORDER_LAYERING: &str = "order.layering";

// Codes: order.completeness
pub const CODE_MISSING_RANK: &str = "missing_rank";

// Codes: order.layering
pub const CODE_UPWARD_DEPENDENCY: &str = "upward_dependency";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
