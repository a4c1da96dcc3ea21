pub mod change_notifier;
pub mod flavor_resolver;
pub mod view_service;
