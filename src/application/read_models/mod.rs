//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of analysis results for the formatters.

pub mod component_view;
pub mod health_report_read_model;
mod health_report_read_model_builder;

pub use component_view::{ComponentRowView, ComponentStatus, ContrastView, IssueView, VariantView};
pub use health_report_read_model::{
    ContrastAnalysisView, HealthReportReadModel, ReportMetadataView,
};
pub use health_report_read_model_builder::HealthReportReadModelBuilder;
