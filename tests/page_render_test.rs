use anyhow::Result;
use chrono::Datelike;
use httpmock::prelude::*;
use portfolio_render::core::renderer::{RenderOptions, ERROR_CLASS, LOADING_CLASS, NO_RESULTS_CLASS};
use portfolio_render::core::shell::portfolio_shell;
use portfolio_render::{EventOutcome, HttpContentSource, LoadOutcome, PortfolioPage, RenderError, UiEvent};
use std::time::Duration;

fn categories() -> Vec<String> {
    ["all", "web", "mobile", "design"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn ada_document() -> serde_json::Value {
    serde_json::json!({
        "personal": {
            "name": "Ada",
            "bio": "...",
            "email": "a@x.com",
            "social": {"linkedin": "L", "github": "G"}
        },
        "skills": [{"name": "X", "level": 80}],
        "projects": [{
            "title": "P", "description": "d", "image": "i",
            "link": "l", "category": "web"
        }],
        "experience": [{
            "job": "Eng", "company": "C",
            "duration": "2020-2021", "description": "d"
        }]
    })
}

fn page_for(url: String) -> Result<PortfolioPage<HttpContentSource>> {
    let source = HttpContentSource::new(url, None)?;
    Ok(PortfolioPage::new(
        source,
        portfolio_shell(&categories()),
        RenderOptions::default(),
        Duration::from_millis(20),
    )?)
}

/// 端到端：標題、進度條、專案篩選
#[tokio::test]
async fn test_ada_end_to_end() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ada_document());
    });

    let mut page = page_for(server.url("/data.json"))?;
    let outcome = page.load().await;
    api_mock.assert();
    assert!(outcome.is_loaded());

    {
        let doc = page.document();
        let doc = doc.lock().await;
        let mounts = page.mounts();

        assert_eq!(doc.title(), "Ada - Portfolio");
        let year = chrono::Local::now().year();
        assert_eq!(
            doc.text_content(mounts.footer_text),
            format!("© {} Ada. All rights reserved.", year)
        );
        assert_eq!(doc.text_content(mounts.bio), "...");
        assert_eq!(doc.attribute(mounts.email, "href"), Some("mailto:a@x.com"));
        assert_eq!(doc.attribute(mounts.linkedin, "href"), Some("L"));
        assert_eq!(doc.attribute(mounts.github, "href"), Some("G"));
        assert_eq!(doc.children(mounts.experience_list).len(), 1);

        let cards = doc.elements_by_class("project");
        assert_eq!(cards.len(), 1);
        assert_eq!(doc.attribute(cards[0], "data-category"), Some("web"));
    }

    page.settle_animations().await;
    {
        let doc = page.document();
        let doc = doc.lock().await;
        let fills = doc.elements_by_class("skill-fill");
        assert_eq!(fills.len(), 1);
        assert_eq!(doc.style(fills[0], "width"), Some("80%"));
    }

    let outcome = page.click_filter("web").await?;
    assert_eq!(
        outcome,
        EventOutcome::Filtered { category: "web".to_string(), shown: 1 }
    );

    let outcome = page.click_filter("design").await?;
    assert_eq!(
        outcome,
        EventOutcome::Filtered { category: "design".to_string(), shown: 0 }
    );

    let doc = page.document();
    let doc = doc.lock().await;
    let list = doc.children(page.mounts().projects_list);
    assert_eq!(list.len(), 1);
    assert!(doc.has_class(list[0], NO_RESULTS_CLASS));
    assert!(doc.elements_by_class("project").is_empty());

    Ok(())
}

#[tokio::test]
async fn test_filter_subsequence_and_exclusive_active() -> Result<()> {
    let server = MockServer::start();
    let mut document = ada_document();
    document["projects"] = serde_json::json!([
        {"title": "A", "description": "", "image": "", "link": "", "category": "web"},
        {"title": "B", "description": "", "image": "", "link": "", "category": "mobile"},
        {"title": "C", "description": "", "image": "", "link": "", "category": "web"},
        {"title": "D", "description": "", "image": "", "link": "", "category": "design"}
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(document);
    });

    let mut page = page_for(server.url("/data.json"))?;
    page.load().await;

    let expected: [(&str, Vec<&str>); 4] = [
        ("web", vec!["A", "C"]),
        ("mobile", vec!["B"]),
        ("design", vec!["D"]),
        ("all", vec!["A", "B", "C", "D"]),
    ];

    for (category, titles) in expected {
        page.click_filter(category).await?;

        let doc = page.document();
        let doc = doc.lock().await;
        let shown: Vec<String> = doc
            .elements_by_class("project")
            .into_iter()
            .map(|card| {
                let h3 = doc.first_descendant_by_tag(card, "h3").unwrap();
                doc.text_content(h3)
            })
            .collect();
        assert_eq!(shown, titles, "category {}", category);

        let active: Vec<_> = page
            .mounts()
            .filter_buttons
            .iter()
            .filter(|b| doc.has_class(**b, "active"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(doc.attribute(*active[0], "data-category"), Some(category));
    }

    Ok(())
}

#[tokio::test]
async fn test_http_404_clears_indicators() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(404);
    });

    let mut page = page_for(server.url("/data.json"))?;
    let outcome = page.load().await;

    api_mock.assert();
    assert!(matches!(
        outcome,
        LoadOutcome::Failed(RenderError::HttpStatus { status: 404 })
    ));

    let doc = page.document();
    let doc = doc.lock().await;
    assert!(doc.elements_by_class(LOADING_CLASS).is_empty());
    assert_eq!(
        doc.elements_by_class(ERROR_CLASS).len(),
        doc.elements_by_tag("section").len()
    );
    Ok(())
}

#[tokio::test]
async fn test_network_error_after_success_leaves_no_stale_content() -> Result<()> {
    let server = MockServer::start();
    let mut api_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(ada_document());
    });

    let mut page = page_for(server.url("/data.json"))?;
    assert!(page.load().await.is_loaded());

    api_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).body("<html>not json</html>");
    });

    let outcome = page.load().await;
    assert!(matches!(outcome, LoadOutcome::Failed(RenderError::Parse(_))));

    let doc = page.document();
    let doc = doc.lock().await;
    let mounts = page.mounts();
    assert!(doc.children(mounts.skills_list).is_empty());
    assert!(doc.children(mounts.projects_list).is_empty());
    assert!(doc.children(mounts.experience_list).is_empty());
    assert!(doc.elements_by_class(LOADING_CLASS).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server() -> Result<()> {
    // 沒有服務在監聽的埠
    let mut page = page_for("http://127.0.0.1:9/data.json".to_string())?;
    let outcome = page.load().await;
    assert!(matches!(outcome, LoadOutcome::Failed(RenderError::Http(_))));

    let outcome = page.dispatch(UiEvent::HamburgerClick).await?;
    assert_eq!(outcome, EventOutcome::NavToggled { open: true });
    Ok(())
}
