/// UI layer: sidebar filter widgets, KPI cards, charts, and the word cloud.
/// Consumes `AggregateResult` and the visible subset; never touches the
/// records directly beyond rendering.
pub mod charts;
pub mod panels;
pub mod wordcloud;
