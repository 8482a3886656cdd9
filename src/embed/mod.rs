mod params;
pub mod time;

pub use params::{build_embed_params, EmbedParams, EventConfig, OrderContext, SubEventWindow};
