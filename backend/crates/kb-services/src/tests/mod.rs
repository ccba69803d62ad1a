mod notifier;
mod service_context;
