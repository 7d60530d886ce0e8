use crate::core::animation::{AnimationScheduler, SharedDocument};
use crate::core::dom::Document;
use crate::core::filter::ProjectFilter;
use crate::core::interactions::{self, EventOutcome, UiEvent};
use crate::core::mount::MountPoints;
use crate::core::renderer::{RenderOptions, RenderSummary, Renderer};
use crate::domain::model::ContentDocument;
use crate::domain::ports::ContentSource;
use crate::utils::error::{RenderError, Result};
use chrono::Datelike;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// How a `load()` ended. Either way the page has already been updated.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(RenderSummary),
    Failed(RenderError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// A host page plus everything rendered into it. Owns the document tree,
/// the content once loaded, the project filter state and the pending skill
/// bar animations.
pub struct PortfolioPage<S: ContentSource> {
    document: SharedDocument,
    mounts: MountPoints,
    source: S,
    renderer: Renderer,
    filter: ProjectFilter,
    content: Option<ContentDocument>,
    animations: AnimationScheduler,
}

impl<S: ContentSource> PortfolioPage<S> {
    /// Validates the host page's mount points. Interaction events are
    /// handled from this point on, before any content is loaded.
    pub fn new(
        source: S,
        document: Document,
        options: RenderOptions,
        animation_delay: Duration,
    ) -> Result<Self> {
        let mounts = MountPoints::resolve(&document)?;
        for href in interactions::dangling_anchors(&document) {
            tracing::warn!("In-page link '{}' has no target on the host page", href);
        }

        Ok(Self {
            document: Arc::new(Mutex::new(document)),
            mounts,
            source,
            renderer: Renderer::new(options),
            filter: ProjectFilter::default(),
            content: None,
            animations: AnimationScheduler::new(animation_delay),
        })
    }

    pub fn document(&self) -> SharedDocument {
        Arc::clone(&self.document)
    }

    pub fn mounts(&self) -> &MountPoints {
        &self.mounts
    }

    pub fn content(&self) -> Option<&ContentDocument> {
        self.content.as_ref()
    }

    pub fn selected_category(&self) -> &str {
        self.filter.selected()
    }

    /// Fetches the content document once and renders it. Failures are
    /// logged and shown on the page as per-section error placeholders.
    pub async fn load(&mut self) -> LoadOutcome {
        {
            let mut doc = self.document.lock().await;
            self.renderer.show_loading(&mut doc);
        }

        tracing::info!("Loading content from {}", self.source.describe());
        let fetched = self.source.fetch().await;

        let removed = {
            let mut doc = self.document.lock().await;
            self.renderer.clear_loading(&mut doc)
        };
        tracing::debug!("Removed {} loading indicators", removed);

        match fetched {
            Ok(content) => {
                let summary = self.populate(content).await;
                LoadOutcome::Loaded(summary)
            }
            Err(e) => {
                tracing::error!("Error loading content: {}", e);
                self.animations.cancel_all();
                self.content = None;

                let mut doc = self.document.lock().await;
                self.renderer.clear_lists(&mut doc, &self.mounts);
                self.renderer.show_error(&mut doc);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Renders `content` into the page and schedules the skill bar
    /// transitions. Anything rendered by an earlier populate is replaced.
    pub async fn populate(&mut self, content: ContentDocument) -> RenderSummary {
        self.animations.cancel_all();
        let year = chrono::Local::now().year();

        let (summary, transitions) = {
            let mut doc = self.document.lock().await;
            let rendered = self
                .renderer
                .populate(&mut doc, &self.mounts, &content, &self.filter, year);
            tracing::debug!(
                "Page tree holds {} nodes in {} slots",
                doc.node_count(),
                doc.capacity()
            );
            rendered
        };
        self.animations.schedule(&self.document, transitions);
        self.content = Some(content);

        tracing::info!(
            "Rendered {} skills, {} projects, {} experience entries",
            summary.skills,
            summary.projects,
            summary.experience
        );
        summary
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> Result<EventOutcome> {
        let mut doc = self.document.lock().await;
        match event {
            UiEvent::HamburgerClick => Ok(interactions::toggle_nav(&mut doc, &self.mounts)),
            UiEvent::AnchorClick { href } => {
                interactions::follow_anchor(&mut doc, &self.mounts, &href)
            }
            UiEvent::FilterClick { button } => {
                if !self.mounts.filter_buttons.contains(&button) {
                    return Ok(EventOutcome::Ignored);
                }
                let category = doc
                    .attribute(button, "data-category")
                    .unwrap_or_default()
                    .to_string();

                self.renderer.mark_active_filter(&mut doc, &self.mounts, button);
                self.filter.select(category.clone());

                let shown = match &self.content {
                    Some(content) => self.renderer.render_projects(
                        &mut doc,
                        &self.mounts,
                        &content.projects,
                        &self.filter,
                    ),
                    // 尚未載入內容，只記錄選擇
                    None => 0,
                };
                tracing::debug!(
                    "Filter '{}' shows {} projects ({} live nodes)",
                    category,
                    shown,
                    doc.node_count()
                );
                Ok(EventOutcome::Filtered { category, shown })
            }
        }
    }

    /// Clicks the filter button carrying `category`.
    pub async fn click_filter(&mut self, category: &str) -> Result<EventOutcome> {
        let found = {
            let doc = self.document.lock().await;
            self.mounts.filter_button(&doc, category)
        };
        let button = found.ok_or_else(|| RenderError::ElementNotFound {
            selector: format!(".filter-btn[data-category=\"{}\"]", category),
        })?;

        self.dispatch(UiEvent::FilterClick { button }).await
    }

    pub fn pending_animations(&self) -> usize {
        self.animations.pending()
    }

    pub async fn settle_animations(&mut self) {
        self.animations.settle().await;
    }

    /// Cancels pending animations. Returns how many were cancelled.
    pub fn teardown(&mut self) -> usize {
        self.animations.cancel_all()
    }

    pub async fn to_html(&self) -> String {
        self.document.lock().await.to_html()
    }
}
