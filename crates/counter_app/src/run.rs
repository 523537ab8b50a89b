//! Drives one harvest: load or fetch the corpus, scan it, write the types file.

use anyhow::Context;
use counter_engine::{
    harvest_cards, load_card_file, search_url, EngineEvent, HarvestProgress, HarvestReport,
    Harvester, LogProgressSink, ProgressSink, Stage, TypesFileWriter,
};
use engine_logging::engine_info;

use crate::config::{CorpusSource, HarvestConfig};

pub fn run(config: &HarvestConfig) -> anyhow::Result<HarvestReport> {
    let sink = LogProgressSink;
    let vocabulary = config.vocabulary();

    let report = match &config.source {
        CorpusSource::CardFile(path) => {
            engine_info!("Scanning card file {:?}", path);
            let cards = load_card_file(path)
                .with_context(|| format!("failed to load cards from {}", path.display()))?;
            harvest_cards(&cards, &vocabulary)
        }
        CorpusSource::Search { endpoint, query } => {
            let start_url = search_url(endpoint, query)?;
            engine_info!("Searching {start_url}");
            let harvester = Harvester::new(config.fetch.clone())?.with_vocabulary(vocabulary);
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime
                .block_on(harvester.run(&start_url, &sink))
                .context("card search failed")?
        }
    };

    emit(&sink, Stage::Writing, &report);
    let writer = TypesFileWriter::with_filename(&config.output_dir, config.file_name.clone());
    writer
        .write(&report.counters)
        .with_context(|| format!("failed to write {}", writer.target().display()))?;
    emit(&sink, Stage::Done, &report);

    if config.print {
        for name in report.counters.sorted() {
            println!("{name}");
        }
    }

    Ok(report)
}

fn emit(sink: &dyn ProgressSink, stage: Stage, report: &HarvestReport) {
    sink.emit(EngineEvent::Progress(HarvestProgress {
        stage,
        pages: report.pages,
        cards: report.cards,
        total_cards: None,
    }));
}
