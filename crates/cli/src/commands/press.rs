//! Press command implementation.
//!
//! Loads a hotkey configuration the way a browser would, builds an
//! in-memory presentation and replays keypresses against it. After each
//! scroll the target step becomes active, as the page's scroll observer
//! would make it.

use anyhow::{Context, Result};
use scrolly_client::{MetricsCollector, ScrollyClient, standard_loader};
use scrolly_config::constants::SITE_SOURCE_NAME;
use scrolly_config::{ConfigLoader, FileConfigSource};
use scrolly_hotkeys::document::MARKER_ATTRIBUTE;
use scrolly_hotkeys::{
    Binding, ControlCommand, ElementId, HotkeyController, KeyOutcome, MemoryDocument,
    MemoryViewport, ViewportEvent,
};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::args::{OutputFormat, PressArgs};

/// Prefix marking a control command in the key list.
const COMMAND_PREFIX: char = ':';

#[derive(Debug, Serialize)]
struct PressRecord {
    key: String,
    claimed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    binding: Option<Binding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    effects: Vec<String>,
    active_step: Option<usize>,
}

impl PressRecord {
    fn render_text(&self) -> String {
        if let Some(ref command) = self.command {
            return format!("{} -> control {}", self.key, command);
        }
        let Some(ref binding) = self.binding else {
            return format!("{} -> not claimed", self.key);
        };
        if self.effects.is_empty() {
            return format!("{} -> {}: no target", self.key, binding);
        }
        format!("{} -> {}: {}", self.key, binding, self.effects.join(", "))
    }
}

pub async fn run(args: PressArgs, metrics_enabled: bool) -> Result<()> {
    let loader = build_loader(&args, metrics_enabled)?;
    let mut controller = HotkeyController::new(loader);
    let origin = controller.init().await;
    info!(%origin, "Hotkey configuration loaded");
    eprintln!("Using hotkey configuration from {}", origin);

    let mut doc = build_document(&args);
    let mut viewport = MemoryViewport::new();
    let mut records = Vec::with_capacity(args.keys.len());

    for key in &args.keys {
        let record = match key.strip_prefix(COMMAND_PREFIX).filter(|rest| !rest.is_empty()) {
            Some(name) => {
                let command: ControlCommand = name.parse()?;
                controller.apply(command).await;
                PressRecord {
                    key: key.clone(),
                    claimed: false,
                    binding: None,
                    command: Some(name.to_string()),
                    effects: Vec::new(),
                    active_step: active_step(&doc),
                }
            }
            None => press(&controller, key, &mut doc, &mut viewport),
        };
        records.push(record);
    }

    match args.output {
        OutputFormat::Text => {
            for record in &records {
                println!("{}", record.render_text());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

fn press(
    controller: &HotkeyController,
    key: &str,
    doc: &mut MemoryDocument,
    viewport: &mut MemoryViewport,
) -> PressRecord {
    let outcome = controller.handle_key(key, &*doc, viewport);
    let events = viewport.take_events();

    for event in &events {
        if let ViewportEvent::ScrolledIntoView { element, .. } = event {
            doc.activate(*element);
        }
    }

    PressRecord {
        key: key.to_string(),
        claimed: outcome.prevent_default(),
        binding: match outcome {
            KeyOutcome::Claimed { binding, .. } => Some(binding),
            KeyOutcome::Ignored => None,
        },
        command: None,
        effects: events.iter().map(|e| describe_event(doc, e)).collect(),
        active_step: active_step(doc),
    }
}

fn describe_event(doc: &MemoryDocument, event: &ViewportEvent<ElementId>) -> String {
    match event {
        ViewportEvent::ScrolledIntoView { element, .. } => {
            format!("scroll to {}", doc.describe(*element))
        }
        ViewportEvent::ScrolledToTop { .. } => "scroll to top".to_string(),
        ViewportEvent::EnteredFullscreen => "enter fullscreen".to_string(),
        ViewportEvent::ExitedFullscreen => "exit fullscreen".to_string(),
    }
}

fn active_step(doc: &MemoryDocument) -> Option<usize> {
    scrolly_hotkeys::StepPosition::locate(doc).current
}

fn build_loader(args: &PressArgs, metrics_enabled: bool) -> Result<ConfigLoader> {
    if let Some(ref path) = args.config {
        return Ok(
            ConfigLoader::new().with_source(FileConfigSource::new(path).with_name(SITE_SOURCE_NAME))
        );
    }

    if let Some(ref base_url) = args.base_url {
        let metrics = if metrics_enabled {
            MetricsCollector::new()
        } else {
            MetricsCollector::disabled()
        };
        let mut builder = ScrollyClient::builder()
            .base_url(base_url.clone())
            .metrics(metrics);
        if let Some(secs) = args.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .with_context(|| format!("Invalid presentation server URL {}", base_url))?;
        return Ok(standard_loader(&client));
    }

    Ok(ConfigLoader::new())
}

fn build_document(args: &PressArgs) -> MemoryDocument {
    let mut doc = MemoryDocument::presentation(args.steps);
    for name in &args.sections {
        doc.push_section(name);
    }
    for value in &args.markers {
        let element = doc.push_element(&[]);
        doc.set_attribute(element, MARKER_ATTRIBUTE, value);
    }
    if let Some(index) = args.active {
        doc.activate_step(index);
    }
    doc
}
