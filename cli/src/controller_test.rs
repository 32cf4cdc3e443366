use super::*;
use crate::config::ClientConfig;

fn controller() -> Controller {
    let config = ClientConfig::new("http://127.0.0.1:9").expect("config");
    Controller::new(Backend::new(config).expect("backend"), Printer::sink())
}

fn last_text(controller: &Controller) -> String {
    controller.read(|session| session.terminal().last().map(|line| line.text.clone()).unwrap_or_default())
}

fn ticker_generation(controller: &Controller) -> Option<u64> {
    lock(&controller.shared).ticker.generation()
}

#[tokio::test(start_paused = true)]
async fn restarted_animation_ticks_once_per_period() {
    let controller = controller();
    let generation = controller.update(|session| session.start_stream().generation);
    controller.update(|session| session.on_stream_message(generation, "Step one"));
    controller.update(|session| session.on_stream_message(generation, "Step two"));

    tokio::time::sleep(Duration::from_millis(510)).await;
    assert_eq!(last_text(&controller), "Step two.");
}

#[tokio::test(start_paused = true)]
async fn dots_cycle_back_to_bare_text() {
    let controller = controller();
    let generation = controller.update(|session| session.start_stream().generation);
    controller.update(|session| session.on_stream_message(generation, "Loading model"));

    tokio::time::sleep(Duration::from_millis(1510)).await;
    assert_eq!(last_text(&controller), "Loading model...");
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(last_text(&controller), "Loading model");
}

#[tokio::test(start_paused = true)]
async fn sentinel_stops_the_ticker() {
    let controller = controller();
    let generation = controller.update(|session| session.start_stream().generation);
    controller.update(|session| session.on_stream_message(generation, "Loading model"));
    assert!(ticker_generation(&controller).is_some());

    controller.update(|session| session.on_stream_message(generation, "__ANALYSIS_DONE__"));
    assert_eq!(ticker_generation(&controller), None);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(last_text(&controller), "Loading model");
}

#[test]
fn replacing_the_stream_cancels_the_old_task() {
    let controller = controller();
    let first = controller.update(|session| session.start_stream().generation);
    let cancel = controller.attach_stream(first);
    assert!(!cancel.is_cancelled());

    controller.update(|session| session.start_stream());
    assert!(cancel.is_cancelled());
}

#[test]
fn validation_failure_starts_nothing() {
    let controller = controller();
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().expect("runtime");
    let err = runtime.block_on(controller.run_analysis()).expect_err("no files");
    assert!(matches!(err, CliError::Analysis(session::AnalysisError::Validation)));
    assert_eq!(last_text(&controller), "Upload both images");
    assert!(lock(&controller.shared).stream.is_none());
}
