/// A single submodel prediction to run.
mod request;
pub use request::ExecutionRequest;

/// Turns parameter sets into execution requests.
mod request_builder;
pub use request_builder::RequestBuilder;

/// Utility for assembling predictor command lines.
mod command_builder;
use command_builder::CommandBuilder;
