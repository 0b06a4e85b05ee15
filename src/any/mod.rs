pub use self::{
    attributes::{
        AttributeProvider, DifficultyAttributes, ModeAttributeProvider, PerformanceAttributes,
    },
    evaluate::{evaluate, Evaluation},
    performance::Performance,
};

mod attributes;
mod evaluate;
mod performance;
