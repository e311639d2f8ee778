//! Shared-presence reconciliation
//!
//! The transport is a black box: the local body's state is published as a
//! full snapshot every frame, and inbound updates arrive as a complete
//! peer-id-to-snapshot mapping with no ordering or delivery guarantees. Each
//! inbound batch authoritatively replaces the remote-body set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::body::Body;

pub type PeerId = String;

/// Wire record for one peer, re-sent in full every frame; last write wins.
///
/// The field set is the explicit merge whitelist: nothing outside it ever
/// reaches a remote body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub is_dead: bool,
    pub head_offset: f32,
    /// Cosmetic display name, routed to the roster rather than the body.
    pub name: String,
}

impl PresenceSnapshot {
    pub fn of(body: &Body, name: &str) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            velocity_x: body.vel.x,
            velocity_y: body.vel.y,
            is_dead: body.is_dead,
            head_offset: body.head_offset,
            name: name.to_string(),
        }
    }

    /// All numeric fields finite. Anything else is a malformed snapshot and
    /// must not reach a body.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.velocity_x.is_finite()
            && self.velocity_y.is_finite()
            && self.head_offset.is_finite()
    }
}

/// Outbound half of the presence transport.
pub trait PresenceChannel {
    fn publish(&mut self, snapshot: &PresenceSnapshot);
}

/// In-memory channel for tests and the headless demo.
#[derive(Debug, Default)]
pub struct LoopbackChannel {
    pub sent: Vec<PresenceSnapshot>,
}

impl PresenceChannel for LoopbackChannel {
    fn publish(&mut self, snapshot: &PresenceSnapshot) {
        self.sent.push(snapshot.clone());
    }
}

/// Owns the remote-body map and the peer-id-to-display-name roster.
#[derive(Debug)]
pub struct PresenceReconciler {
    local_id: PeerId,
    local_name: String,
    remote: HashMap<PeerId, Body>,
    roster: HashMap<PeerId, String>,
}

impl PresenceReconciler {
    pub fn new(local_id: impl Into<PeerId>, local_name: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            local_name: local_name.into(),
            remote: HashMap::new(),
            roster: HashMap::new(),
        }
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Send the local body's full snapshot. Called once per frame, never
    /// diffed or rate-limited.
    pub fn publish_local(&self, body: &Body, channel: &mut dyn PresenceChannel) {
        channel.publish(&PresenceSnapshot::of(body, &self.local_name));
    }

    /// Merge one peer's snapshot: create the mirror body on first sight,
    /// otherwise overwrite the whitelisted fields wholesale. The local peer's
    /// own id never produces a mirror.
    pub fn merge_snapshot(&mut self, peer: &str, snapshot: &PresenceSnapshot) {
        if peer == self.local_id {
            return;
        }
        if !snapshot.is_valid() {
            log::warn!("skipping malformed presence snapshot from {peer}");
            return;
        }

        let body = self
            .remote
            .entry(peer.to_string())
            .or_insert_with(|| Body::new(snapshot.x, snapshot.y));
        body.pos.x = snapshot.x;
        body.pos.y = snapshot.y;
        body.vel.x = snapshot.velocity_x;
        body.vel.y = snapshot.velocity_y;
        body.is_dead = snapshot.is_dead;
        body.head_offset = snapshot.head_offset;

        self.roster.insert(peer.to_string(), snapshot.name.clone());
    }

    /// Apply a complete inbound presence set: merge every entry, then drop
    /// any tracked peer absent from it. No grace period; a vanished peer's
    /// mirror disappears immediately, and a re-added peer starts fresh.
    pub fn apply_batch(&mut self, batch: &HashMap<PeerId, PresenceSnapshot>) {
        for (peer, snapshot) in batch {
            self.merge_snapshot(peer, snapshot);
        }
        self.remote.retain(|peer, _| batch.contains_key(peer));
        self.roster.retain(|peer, _| batch.contains_key(peer));
    }

    /// Decode and apply a JSON-encoded batch, absorbing malformed payloads
    /// with a warning rather than letting them reach the frame loop.
    pub fn apply_json(&mut self, payload: &str) {
        match serde_json::from_str::<HashMap<PeerId, PresenceSnapshot>>(payload) {
            Ok(batch) => self.apply_batch(&batch),
            Err(err) => log::warn!("discarding undecodable presence batch: {err}"),
        }
    }

    /// Display name for a peer, falling back to the raw id when the roster
    /// has no entry.
    pub fn display_name<'a>(&'a self, peer: &'a str) -> &'a str {
        self.roster.get(peer).map(String::as_str).unwrap_or(peer)
    }

    pub fn remote_count(&self) -> usize {
        self.remote.len()
    }

    pub fn remote_body(&self, peer: &str) -> Option<&Body> {
        self.remote.get(peer)
    }

    pub fn remote_bodies(&self) -> impl Iterator<Item = (&PeerId, &Body)> {
        self.remote.iter()
    }

    pub fn remote_bodies_mut(&mut self) -> impl Iterator<Item = (&PeerId, &mut Body)> {
        self.remote.iter_mut()
    }
}
