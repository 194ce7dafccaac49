use std::io;

use graph_formatter::{
    demo_graph, format_graph, formatter_config_from_env, init_logging, load_graph_file,
    log_app_start, log_interval_selected, log_output_written, logging_config_from_env,
    read_graph, render_mappings, InputSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_cfg = logging_config_from_env();
    init_logging(&logging_cfg)?;
    log_app_start(&logging_cfg);

    let cfg = formatter_config_from_env()?;
    log_interval_selected(cfg.interval, &cfg.input, cfg.input_format);

    let graph = match &cfg.input {
        InputSource::Demo => demo_graph(),
        InputSource::Stdin => read_graph(io::stdin().lock(), cfg.input_format)?,
        InputSource::File(path) => load_graph_file(path, cfg.input_format)?,
    };

    let mappings = format_graph(&graph, cfg.interval)?;
    println!("{}", render_mappings(&mappings)?);
    log_output_written(cfg.interval, mappings.len());

    Ok(())
}
