// ============================================================================
// Engine Module
// Contains the allocation business logic
// ============================================================================

mod allocator;

pub use allocator::Portions;
