mod dispatcher;
pub(crate) mod internal;

pub use dispatcher::dispatch_action;
pub use internal::SortKey;
