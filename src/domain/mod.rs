// Domain layer - Pure data model and the classification/segmentation engine
pub mod charts;
pub mod segments;
pub mod speed;
pub mod telemetry;
pub mod workbook;
