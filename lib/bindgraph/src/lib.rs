#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod model {
    pub use bindgraph_model::*;
}

pub mod adapter {
    pub use bindgraph_adapter::*;
}

pub mod results {
    pub use bindgraph_results::*;
}

pub mod export {
    pub use bindgraph_export::*;
}
