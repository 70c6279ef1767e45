mod config_pipeline;
mod render_facet;
mod spellcheck;
