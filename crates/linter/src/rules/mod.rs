/// Lint rule implementations
///
/// Each rule lives in its own file and implements [`crate::traits::NodeLintRule`].
mod property_order;

pub use property_order::PropertyOrderRuleImpl;
