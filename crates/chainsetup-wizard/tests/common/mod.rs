//! Scripted collaborators for driving the workflow without a terminal

#![allow(dead_code)]

use async_trait::async_trait;
use chainsetup_rpc::{CandidateSource, EndpointProber, ProbeResult};
use chainsetup_utils::{prompt_error, SetupError, SetupResult};
use chainsetup_wizard::Prompter;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One scripted operator answer
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the choice with this exact label
    Pick(String),
    /// Type this text
    Type(String),
}

pub fn pick(label: &str) -> Answer {
    Answer::Pick(label.to_string())
}

pub fn typed(text: &str) -> Answer {
    Answer::Type(text.to_string())
}

/// Prompt shown to the scripted operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Select { message: String, choices: Vec<String> },
    Input { message: String },
}

/// Prompter answering from a fixed script and recording everything shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<Shown>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn select_one(&mut self, message: &str, choices: &[String]) -> SetupResult<usize> {
        self.prompts.push(Shown::Select {
            message: message.to_string(),
            choices: choices.to_vec(),
        });

        match self.answers.pop_front() {
            Some(Answer::Pick(label)) => choices
                .iter()
                .position(|c| *c == label)
                .ok_or_else(|| prompt_error!("'{}' not among {:?}", label, choices)),
            Some(other) => Err(prompt_error!("expected a pick, script has {:?}", other)),
            None => Err(SetupError::InputClosed),
        }
    }

    async fn input_text(&mut self, message: &str) -> SetupResult<String> {
        self.prompts.push(Shown::Input {
            message: message.to_string(),
        });

        match self.answers.pop_front() {
            Some(Answer::Type(text)) => Ok(text.trim().to_string()),
            Some(other) => Err(prompt_error!("expected text, script has {:?}", other)),
            None => Err(SetupError::InputClosed),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Prober with fixed verdicts; unknown URLs are invalid
#[derive(Debug, Clone, Default)]
pub struct StubProber {
    live: HashMap<String, u64>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubProber {
    pub fn live(urls: &[(&str, u64)]) -> Self {
        Self {
            live: urls.iter().map(|(u, h)| (u.to_string(), *h)).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EndpointProber for StubProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        self.calls.lock().unwrap().push(url.to_string());
        match self.live.get(url) {
            Some(height) => ProbeResult::valid(*height),
            None => ProbeResult::invalid(),
        }
    }
}

/// Registry with fixed answers; unknown ids return None
#[derive(Debug, Clone, Default)]
pub struct StubSource {
    entries: HashMap<String, Option<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, urls: Option<&[&str]>) -> Self {
        self.entries.insert(
            id.to_string(),
            urls.map(|urls| urls.iter().map(|u| u.to_string()).collect()),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateSource for StubSource {
    async fn fetch_candidates(&self, network_id: &str) -> Option<Vec<String>> {
        self.calls.lock().unwrap().push(network_id.to_string());
        self.entries.get(network_id).cloned().flatten()
    }
}
