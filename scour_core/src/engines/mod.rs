// Engines are feature-gated so hosts only compile the connectors they
// actually route queries to.

#[cfg(feature = "lemmy")]
pub mod lemmy;
