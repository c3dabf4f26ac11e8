use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{
    BOOP_DURATION_SEC, BOOP_END_GAIN, BOOP_END_HZ, BOOP_START_GAIN, BOOP_START_HZ, BOOP_SWEEP_SEC,
};

#[derive(Debug, Error)]
pub enum AudioError {
    /// The host has no usable WebAudio backend.
    #[error("audio unavailable on this host: {0}")]
    Unavailable(String),
    #[error("{node} setup failed: {reason}")]
    Graph { node: &'static str, reason: String },
}

fn graph_err(node: &'static str) -> impl Fn(JsValue) -> AudioError {
    move |e| AudioError::Graph {
        node,
        reason: format!("{:?}", e),
    }
}

/// Play a short rising "boop" and hand back the context that owns it.
///
/// Every call builds its own `AudioContext`; sine 440Hz -> 880Hz over 0.1s,
/// gain 0.7 decaying over 0.3s, then the oscillator stops itself.
pub fn generate_boop() -> Result<web::AudioContext, AudioError> {
    let ctx = web::AudioContext::new().map_err(|e| AudioError::Unavailable(format!("{:?}", e)))?;
    let now = ctx.current_time();

    let osc = web::OscillatorNode::new(&ctx).map_err(graph_err("OscillatorNode"))?;
    osc.set_type(web::OscillatorType::Sine);
    let freq = osc.frequency();
    freq.set_value_at_time(BOOP_START_HZ, now).map_err(graph_err("frequency"))?;
    freq.exponential_ramp_to_value_at_time(BOOP_END_HZ, now + BOOP_SWEEP_SEC)
        .map_err(graph_err("frequency"))?;

    let gain = web::GainNode::new(&ctx).map_err(graph_err("GainNode"))?;
    let g = gain.gain();
    g.set_value_at_time(BOOP_START_GAIN, now).map_err(graph_err("gain"))?;
    g.exponential_ramp_to_value_at_time(BOOP_END_GAIN, now + BOOP_DURATION_SEC)
        .map_err(graph_err("gain"))?;

    osc.connect_with_audio_node(&gain).map_err(graph_err("oscillator connect"))?;
    gain.connect_with_audio_node(&ctx.destination()).map_err(graph_err("gain connect"))?;

    osc.start_with_when(now).map_err(graph_err("oscillator start"))?;
    osc.stop_with_when(now + BOOP_DURATION_SEC).map_err(graph_err("oscillator stop"))?;
    log::debug!("boop scheduled at t={:.3}", now);
    Ok(ctx)
}

/// Something holding host audio resources that must be released explicitly.
pub trait Disposable {
    fn dispose(&self);
}

impl Disposable for web::AudioContext {
    fn dispose(&self) {
        if let Err(e) = self.close() {
            log::warn!("AudioContext close error: {:?}", e);
        }
    }
}

/// Keeps at most one sound context alive: a new one closes the previous,
/// and whatever is left is closed on drop.
pub struct LastSound<H: Disposable> {
    current: Option<H>,
}

impl<H: Disposable> Default for LastSound<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: Disposable> LastSound<H> {
    pub fn replace(&mut self, handle: H) {
        if let Some(old) = self.current.replace(handle) {
            old.dispose();
        }
    }

    pub fn is_holding(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: Disposable> Drop for LastSound<H> {
    fn drop(&mut self) {
        if let Some(h) = self.current.take() {
            h.dispose();
        }
    }
}

/// Play a boop and park its context in `slot`; failures are logged, not raised.
pub fn play_boop(slot: &mut LastSound<web::AudioContext>) {
    match generate_boop() {
        Ok(ctx) => slot.replace(ctx),
        Err(e) => log::warn!("boop failed: {}", e),
    }
}
