//! Built-in tool catalog and the HTTP execution endpoint adapter
//!
//! One module per catalog category; each tool contributes a
//! `*_definition()` function and a name constant, and [`default_catalog`]
//! assembles them in declaration order. The catalog holds no external
//! resources, so the process-wide [`catalog`] singleton needs no teardown.

pub mod analysis;
pub mod calculation;
pub mod document;
pub mod drafting;
pub mod research;
pub mod timeline;

mod endpoint;

pub use endpoint::HttpToolEndpoint;

use std::sync::LazyLock;

use juris_domain::tool::catalog::ToolCatalog;

/// Build the full tool catalog.
///
/// Declaration order here is the order `all()` reports and the order the
/// panel lists tools in.
pub fn default_catalog() -> ToolCatalog {
    ToolCatalog::new()
        .register(drafting::petition_generator_definition())
        .register(analysis::contract_analyzer_definition())
        .register(research::jurisprudence_search_definition())
        .register(document::document_summarizer_definition())
        .register(timeline::case_timeline_definition())
        .register(calculation::deadline_calculator_definition())
        .register(calculation::fee_calculator_definition())
}

static CATALOG: LazyLock<ToolCatalog> = LazyLock::new(default_catalog);

/// Process-wide read-only catalog, built on first access
pub fn catalog() -> &'static ToolCatalog {
    &CATALOG
}
