//! Contact-form scenarios, driven through a real Chromium instance.
//!
//! The default tests run against local fixture copies of the form markup,
//! one per observed page behavior (plain navigation, fetch-POST JSON,
//! fetch-POST URL-encoded). The live production page is covered by
//! `#[ignore]`d tests since it needs network access and a third-party
//! host to be up.

#![cfg(feature = "browser")]

use std::path::PathBuf;

use contato_e2e::{
    Browser, ContactPage, DirectDriver, FormFields, HarnessConfig, InstructionDriver, PayloadKind,
    ScenarioRunner, ScriptedExecutor, SubmissionObservation,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixture_url(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name);
    format!("file://{}", path.display())
}

fn fixture_config(name: &str) -> HarnessConfig {
    HarnessConfig::new()
        .with_target_url(fixture_url(name))
        .with_submit_timeout(4_000)
        .with_no_sandbox()
}

async fn open(runner: &ScenarioRunner) -> (Browser, ContactPage) {
    let browser = Browser::launch(runner.config())
        .await
        .expect("browser launch");
    let page = runner.open_page(&browser).await.expect("open target page");
    (browser, page)
}

#[tokio::test]
async fn plain_form_submit_is_observed_as_navigation() {
    init_tracing();
    let runner = ScenarioRunner::new(fixture_config("contact_form.html"));
    let (browser, page) = open(&runner).await;

    let fields = FormFields::generate();
    let observation = runner
        .run_submission(&page, &DirectDriver::new(), &fields)
        .await
        .expect("submission scenario");

    // Fields-reset-after-reload was already asserted by the runner.
    assert!(matches!(observation, SubmissionObservation::Navigation(_)));

    let _ = browser.close().await;
}

#[tokio::test]
async fn fetch_form_submit_is_observed_as_post_with_json_body() {
    init_tracing();
    let runner = ScenarioRunner::new(fixture_config("contact_form_fetch.html"));
    let (browser, page) = open(&runner).await;

    let fields = FormFields::generate();
    let observation = runner
        .run_submission(&page, &DirectDriver::new(), &fields)
        .await
        .expect("submission scenario");

    match observation {
        SubmissionObservation::PostRequest(captured) => {
            assert_eq!(captured.method, "POST");
            assert_eq!(captured.payload_kind(), Some(PayloadKind::Json));
            let decoded = captured.form_fields().expect("decode payload");
            assert_eq!(decoded.get("nome"), Some(&fields.name));
            assert_eq!(decoded.get("email"), Some(&fields.email));
        }
        other => panic!("expected a captured POST, observed {other}"),
    }

    let _ = browser.close().await;
}

#[tokio::test]
async fn urlencoded_form_submit_decodes_at_runtime() {
    init_tracing();
    let runner = ScenarioRunner::new(fixture_config("contact_form_urlencoded.html"));
    let (browser, page) = open(&runner).await;

    let fields = FormFields::generate();
    let observation = runner
        .run_submission(&page, &DirectDriver::new(), &fields)
        .await
        .expect("submission scenario");

    match observation {
        SubmissionObservation::PostRequest(captured) => {
            assert_eq!(captured.payload_kind(), Some(PayloadKind::UrlEncoded));
            let decoded = captured.form_fields().expect("decode payload");
            assert_eq!(decoded.get("assunto"), Some(&fields.subject));
            assert_eq!(decoded.get("mensagem"), Some(&fields.message));
        }
        other => panic!("expected a captured POST, observed {other}"),
    }

    let _ = browser.close().await;
}

#[tokio::test]
async fn instruction_mode_matches_direct_mode() {
    init_tracing();
    let runner = ScenarioRunner::new(fixture_config("contact_form_fetch.html"));

    let (browser, page) = open(&runner).await;
    let fields = FormFields::generate();
    let direct = runner
        .run_submission(&page, &DirectDriver::new(), &fields)
        .await
        .expect("direct-mode scenario");
    let _ = browser.close().await;

    let (browser, page) = open(&runner).await;
    let driver = InstructionDriver::new(ScriptedExecutor::new(), "instruction-mode equivalence");
    let fields = FormFields::generate();
    let instructed = runner
        .run_submission(&page, &driver, &fields)
        .await
        .expect("instruction-mode scenario");
    let _ = browser.close().await;

    assert_eq!(direct.kind(), instructed.kind());
}

#[tokio::test]
async fn instruction_mode_covers_the_navigation_branch() {
    init_tracing();
    let runner = ScenarioRunner::new(fixture_config("contact_form.html"));
    let (browser, page) = open(&runner).await;

    let driver = InstructionDriver::new(ScriptedExecutor::new(), "instruction-mode navigation");
    let fields = FormFields::generate();
    let observation = runner
        .run_submission(&page, &driver, &fields)
        .await
        .expect("submission scenario");
    assert!(matches!(observation, SubmissionObservation::Navigation(_)));

    let _ = browser.close().await;
}

#[tokio::test]
async fn empty_required_fields_are_rejected_client_side() {
    init_tracing();
    let config = fixture_config("contact_form.html").with_submit_timeout(1_500);
    let runner = ScenarioRunner::new(config);
    let (browser, page) = open(&runner).await;

    runner
        .run_validation(&page, &DirectDriver::new())
        .await
        .expect("validation scenario");

    let _ = browser.close().await;
}

#[tokio::test]
async fn title_drift_fails_the_open() {
    init_tracing();
    let config = fixture_config("contact_form.html").with_expected_title("Outra Página");
    let runner = ScenarioRunner::new(config);
    let browser = Browser::launch(runner.config())
        .await
        .expect("browser launch");

    let result = runner.open_page(&browser).await;
    assert!(matches!(
        result,
        Err(contato_e2e::ContatoError::Navigation { .. })
    ));

    let _ = browser.close().await;
}

#[tokio::test]
#[ignore = "exercises the live production page; needs network access"]
async fn live_page_happy_path() {
    init_tracing();
    let runner = ScenarioRunner::new(HarnessConfig::from_env().with_no_sandbox());
    let (browser, page) = open(&runner).await;

    let fields = FormFields::generate();
    let observation = runner
        .run_submission(&page, &DirectDriver::new(), &fields)
        .await
        .expect("submission scenario");
    assert!(!observation.is_quiescent());

    let _ = browser.close().await;
}

#[tokio::test]
#[ignore = "exercises the live production page; needs network access"]
async fn live_page_rejects_empty_required_fields() {
    init_tracing();
    let config = HarnessConfig::from_env()
        .with_submit_timeout(3_000)
        .with_no_sandbox();
    let runner = ScenarioRunner::new(config);
    let (browser, page) = open(&runner).await;

    runner
        .run_validation(&page, &DirectDriver::new())
        .await
        .expect("validation scenario");

    let _ = browser.close().await;
}
