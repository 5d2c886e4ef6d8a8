// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests driving [`Remote`] against a recording transceiver.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use limitless_rf::codec::ButtonInfo;
use limitless_rf::observer::{Observer, TraceEvent};
use limitless_rf::stepper::Phase;
use limitless_rf::{
    ButtonIntent, Decoded, ProtocolKind, Receive, Remote, RemoteConfig, SubmitQueue, SyncWord,
    Transceiver, TransceiverError,
};

// ========== Recording transceiver ==========

#[derive(Debug, Clone, PartialEq, Eq)]
struct Transmission {
    message: Vec<u8>,
    channels: Vec<u8>,
    retries: u32,
    delay: Duration,
    sync_word: SyncWord,
    queue: SubmitQueue,
}

#[derive(Debug, Default)]
struct Recorder {
    sent: Vec<Transmission>,
    sync_words: Vec<(SyncWord, Option<SubmitQueue>)>,
    listening: Vec<u8>,
    inbox: VecDeque<Option<Vec<u8>>>,
    requests: Vec<Receive>,
}

impl Recorder {
    fn with_inbox(messages: impl IntoIterator<Item = Option<Vec<u8>>>) -> Self {
        Self {
            inbox: messages.into_iter().collect(),
            ..Self::default()
        }
    }

    fn messages(&self) -> Vec<Vec<u8>> {
        self.sent.iter().map(|t| t.message.clone()).collect()
    }

    fn button_codes(&self, offset: usize) -> Vec<u8> {
        self.sent.iter().map(|t| t.message[offset]).collect()
    }
}

impl Transceiver for Recorder {
    fn multi_transmit(
        &mut self,
        message: &[u8],
        channels: &[u8],
        retries: u32,
        delay: Duration,
        sync_word: SyncWord,
        submit_queue: &SubmitQueue,
    ) -> Result<(), TransceiverError> {
        self.sent.push(Transmission {
            message: message.to_vec(),
            channels: channels.to_vec(),
            retries,
            delay,
            sync_word,
            queue: submit_queue.clone(),
        });
        Ok(())
    }

    fn set_syncword(
        &mut self,
        sync_word: SyncWord,
        submit_queue: Option<&SubmitQueue>,
    ) -> Result<(), TransceiverError> {
        self.sync_words.push((sync_word, submit_queue.cloned()));
        Ok(())
    }

    fn start_listening(&mut self, channel: u8) -> Result<(), TransceiverError> {
        self.listening.push(channel);
        Ok(())
    }

    fn receive(&mut self, request: &Receive) -> Result<Option<Vec<u8>>, TransceiverError> {
        self.requests.push(*request);
        Ok(self.inbox.pop_front().flatten())
    }
}

fn remote(kind: ProtocolKind) -> Remote<Recorder> {
    remote_with(kind, Recorder::default(), RemoteConfig::new())
}

fn remote_with(kind: ProtocolKind, radio: Recorder, config: RemoteConfig) -> Remote<Recorder> {
    Remote::builder(radio, kind, 0x1234)
        .with_message_id(0)
        .with_config(config)
        .build()
        .unwrap()
}

const RGBW_CODE: usize = 5;
const CCT_CODE: usize = 4;

// ========== RGBW ==========

#[test]
fn rgbw_set_color_red() {
    let mut remote = remote(ProtocolKind::Rgbw);

    assert!(remote.set_color(0xFF0000, None).unwrap());

    let radio = remote.transceiver();
    assert_eq!(
        radio.messages(),
        vec![vec![0xB0, 0x12, 0x34, 26, 0x00, 0x0F, 0x01]]
    );
    let sent = &radio.sent[0];
    assert_eq!(sent.channels, vec![9, 40, 71]);
    assert_eq!(sent.sync_word, SyncWord(0x258B, 0x147A));
    assert_eq!(sent.retries, 10);
    assert_eq!(sent.delay, Duration::from_millis(100));
    assert_eq!(sent.queue, SubmitQueue::default());
    assert_eq!(remote.message_id(), 1);
}

#[test]
fn rgbw_off_with_dim_sends_dim_then_off() {
    let mut remote = remote(ProtocolKind::Rgbw);

    assert!(remote.off(Some(2), true, false).unwrap());

    assert_eq!(
        remote.transceiver().messages(),
        vec![
            vec![0xB0, 0x12, 0x34, 0x00, 0x82, 0x0E, 0x01],
            vec![0xB0, 0x12, 0x34, 0x00, 0x02, 0x06, 0x02],
        ]
    );
}

#[test]
fn rgbw_off_without_dim_sends_only_off() {
    let mut remote = remote(ProtocolKind::Rgbw);
    assert!(remote.off(None, false, false).unwrap());
    assert_eq!(remote.transceiver().button_codes(RGBW_CODE), vec![0x02]);
}

#[test]
fn rgbw_brightness_zero_turns_off() {
    let mut remote = remote(ProtocolKind::Rgbw);

    assert!(remote.set_brightness(0, None).unwrap());

    assert_eq!(
        remote.transceiver().messages(),
        vec![
            vec![0xB0, 0x12, 0x34, 0x00, 0x80, 0x0E, 0x01],
            vec![0xB0, 0x12, 0x34, 0x00, 0x00, 0x02, 0x02],
        ]
    );
}

#[test]
fn rgbw_grey_switches_to_white_at_level() {
    let mut remote = remote(ProtocolKind::Rgbw);

    assert!(remote.set_color(0x404040, Some(1)).unwrap());

    assert_eq!(
        remote.transceiver().messages(),
        vec![
            vec![0xB0, 0x12, 0x34, 0x00, 0x01, 0x13, 0x01],
            vec![0xB0, 0x12, 0x34, 0x00, 0x51, 0x0E, 0x02],
        ]
    );
}

#[test]
fn rgbw_out_of_range_brightness_sends_nothing() {
    let mut remote = remote(ProtocolKind::Rgbw);
    assert!(!remote.set_brightness(256, None).unwrap());
    assert!(!remote.set_brightness(-1, Some(1)).unwrap());
    assert!(remote.transceiver().sent.is_empty());
    assert_eq!(remote.message_id(), 0);
}

#[test]
fn rgbw_unsupported_operations() {
    let mut remote = remote(ProtocolKind::Rgbw);
    assert!(!remote.set_temperature(4000, None).unwrap());
    assert!(remote.transceiver().sent.is_empty());

    assert!(remote.night(Some(4)).unwrap());
    assert!(remote.white(None).unwrap());
    assert_eq!(remote.transceiver().button_codes(RGBW_CODE), vec![0x1A, 0x11]);
}

#[test]
fn try_hard_doubles_retries_and_delay() {
    let mut remote = remote(ProtocolKind::Rgbw);

    remote.on(None, true).unwrap();
    remote.on(Some(1), false).unwrap();

    let sent = &remote.transceiver().sent;
    assert_eq!((sent[0].retries, sent[0].delay), (20, Duration::from_millis(200)));
    assert_eq!((sent[1].retries, sent[1].delay), (10, Duration::from_millis(100)));
    assert_eq!(sent[1].message[RGBW_CODE], 0x03);
}

#[test]
fn rgbw_pairing_sequences() {
    let mut remote = remote(ProtocolKind::Rgbw);

    assert!(!remote.pair(2).unwrap());
    assert_eq!(remote.transceiver().button_codes(RGBW_CODE), vec![0x05]);

    assert!(!remote.unpair(2).unwrap());
    assert_eq!(
        remote.transceiver().button_codes(RGBW_CODE),
        vec![0x05, 0x05, 0x15]
    );
}

// ========== CCT ==========

#[test]
fn cct_full_brightness_uses_max_button() {
    let mut remote = remote(ProtocolKind::Cct);

    assert!(remote.set_brightness(255, Some(1)).unwrap());

    assert_eq!(
        remote.transceiver().messages(),
        vec![vec![0x5A, 0x12, 0x34, 0x01, 0x18, 0x01, 0xC1]]
    );
}

#[test]
fn cct_minimum_brightness_saturates_down() {
    let mut remote = remote(ProtocolKind::Cct);

    assert!(remote.set_brightness(1, None).unwrap());

    let radio = remote.transceiver();
    assert_eq!(radio.button_codes(CCT_CODE), vec![0x04; 10]);
    assert!(radio.sent.iter().all(|t| t.message[3] == 0));
}

#[test]
fn cct_high_brightness_uses_max_then_steps_down() {
    let mut remote = remote(ProtocolKind::Cct);

    // 200 scales to level 7 of 0-9
    assert!(remote.set_brightness(200, Some(3)).unwrap());

    let radio = remote.transceiver();
    assert_eq!(radio.button_codes(CCT_CODE), vec![0x17, 0x04, 0x04]);
    assert!(radio.sent.iter().all(|t| t.message[3] == 3));
}

#[test]
fn cct_temperature_steps() {
    let mut remote = remote(ProtocolKind::Cct);

    // 3000 K is device value 9: ten presses up, none back
    assert!(remote.set_temperature(3000, None).unwrap());
    assert_eq!(remote.transceiver().button_codes(CCT_CODE), vec![0x0E; 10]);

    // 4750 K is device value 5: ten up, four down
    let mut remote = self::remote(ProtocolKind::Cct);
    assert!(remote.set_temperature(4750, Some(2)).unwrap());
    let codes = remote.transceiver().button_codes(CCT_CODE);
    assert_eq!(codes.len(), 14);
    assert_eq!(&codes[..10], &[0x0E; 10]);
    assert_eq!(&codes[10..], &[0x0F; 4]);
}

#[test]
fn cct_temperature_is_clamped() {
    let mut remote = remote(ProtocolKind::Cct);
    assert!(remote.set_temperature(1500, None).unwrap());
    assert_eq!(remote.transceiver().button_codes(CCT_CODE), vec![0x0E; 10]);
}

#[test]
fn cct_grey_sets_brightness_only() {
    let mut remote = remote(ProtocolKind::Cct);

    // white-only bulbs skip the white press; 0x80 is level 5 of 0-9
    assert!(remote.set_color(0x808080, None).unwrap());

    assert_eq!(
        remote.transceiver().button_codes(CCT_CODE),
        vec![0x15, 0x04, 0x04, 0x04, 0x04]
    );
}

#[test]
fn cct_unsupported_operations() {
    let mut remote = remote(ProtocolKind::Cct);
    assert!(!remote.set_color(0xFF0000, None).unwrap());
    assert!(remote.white(Some(1)).unwrap());
    assert!(remote.transceiver().sent.is_empty());
}

#[test]
fn cct_pairing_sequences() {
    let config = RemoteConfig::new().with_pair_settle(Duration::ZERO);
    let mut remote = remote_with(ProtocolKind::Cct, Recorder::default(), config);

    assert!(remote.pair(2).unwrap());
    assert_eq!(
        remote.transceiver().messages(),
        vec![vec![0x5A, 0x12, 0x34, 0x02, 0x0D, 0x01, 0xB7]]
    );

    assert!(remote.unpair(2).unwrap());
    assert_eq!(remote.transceiver().button_codes(CCT_CODE), vec![0x0D; 8]);
    assert_eq!(remote.message_id(), 8);
}

// ========== LYH CCT ==========

#[test]
fn lyh_cct_sends_nothing() {
    let mut remote = remote(ProtocolKind::LyhCct);
    assert!(!remote.pair(1).unwrap());
    assert!(!remote.unpair(1).unwrap());
    assert!(!remote.night(None).unwrap());
    assert!(!remote.on(None, false).unwrap());
    assert!(!remote.set_brightness(128, Some(1)).unwrap());
    assert!(!remote.set_brightness(255, None).unwrap());
    assert!(!remote.set_temperature(4000, None).unwrap());
    assert!(!remote.off(Some(2), true, false).unwrap());
    assert!(remote.transceiver().sent.is_empty());
    assert_eq!(remote.message_id(), 0);
}

#[test]
fn unsent_raw_button_keeps_message_id() {
    let mut remote = remote(ProtocolKind::Cct);
    assert!(
        remote
            .raw_send_button(&ButtonIntent::new("disco"))
            .is_err()
    );
    assert_eq!(remote.message_id(), 0);

    remote.on(None, false).unwrap();
    assert_eq!(remote.transceiver().sent[0].message[5], 1);
}

// ========== Receiving ==========

#[test]
fn read_button_decodes_own_protocol() {
    let radio = Recorder::with_inbox([Some(vec![0xB0, 0xAB, 0xCD, 0x00, 0x03, 0x07, 0x42])]);
    let mut remote = remote_with(ProtocolKind::Rgbw, radio, RemoteConfig::new());

    let decoded = remote.read_button(Duration::from_millis(100)).unwrap();

    assert_eq!(
        decoded,
        Some(Decoded::Button(
            ButtonInfo::new("zone_on", 0xABCD, 0x42).with_zone(3)
        ))
    );
    let radio = remote.transceiver();
    assert_eq!(radio.sync_words, vec![(SyncWord(0x258B, 0x147A), None)]);
    assert_eq!(radio.listening, vec![9]);
    assert_eq!(
        radio.requests,
        vec![Receive {
            channel: 9,
            wait: true,
            wait_time: Duration::from_millis(100),
            length: None,
            format_config: None,
        }]
    );
}

#[test]
fn read_button_ignores_foreign_and_empty() {
    let radio = Recorder::with_inbox([
        Some(vec![0x5A, 0x12, 0x34, 0x00, 0x05, 0x01, 0xAD]),
        Some(Vec::new()),
        None,
    ]);
    let mut remote = remote_with(ProtocolKind::Rgbw, radio, RemoteConfig::new());

    for _ in 0..3 {
        assert_eq!(remote.read_button(Duration::ZERO).unwrap(), None);
    }
}

#[test]
fn read_button_lyh_cct_is_raw_fixed_length() {
    let bytes: Vec<u8> = (0..14).collect();
    let radio = Recorder::with_inbox([Some(bytes.clone())]);
    let mut remote = remote_with(ProtocolKind::LyhCct, radio, RemoteConfig::new());

    let decoded = remote.read_button(Duration::from_millis(100)).unwrap();

    assert_eq!(decoded, Some(Decoded::Raw { raw: bytes }));
    let request = remote.transceiver().requests[0];
    assert_eq!(request.channel, 24);
    assert_eq!(request.length, Some(14));
    assert!(request.format_config.is_some());
}

// ========== Configuration, observer, sharing ==========

#[test]
fn json_config_overrides_transmission() {
    let config = RemoteConfig::from_json(
        r#"{"retries": 3, "delay_ms": 25, "channels": [40], "radio_queue": "porch", "message_id": 99}"#,
    )
    .unwrap();
    let mut remote = Remote::builder(Recorder::default(), ProtocolKind::Rgbw, 0x1234)
        .with_config(config)
        .build()
        .unwrap();

    remote.on(None, false).unwrap();

    let sent = &remote.transceiver().sent[0];
    assert_eq!(sent.retries, 3);
    assert_eq!(sent.delay, Duration::from_millis(25));
    assert_eq!(sent.channels, vec![40]);
    assert_eq!(sent.queue, SubmitQueue::new("porch"));
    assert_eq!(sent.message[6], 100);
}

#[test]
fn invalid_config_is_rejected_by_builder() {
    let result = Remote::builder(Recorder::default(), ProtocolKind::Cct, 1)
        .with_config(RemoteConfig::new().with_channels(Vec::new()))
        .build();
    assert!(matches!(result, Err(limitless_rf::Error::Config(_))));
}

#[test]
fn raw_intent_overrides() {
    let mut remote = remote(ProtocolKind::Cct);

    let intent = ButtonIntent::new("night")
        .with_zone(4)
        .with_retries(1)
        .with_delay(Duration::ZERO);
    assert!(remote.raw_send_button(&intent).unwrap());

    let sent = &remote.transceiver().sent[0];
    assert_eq!(sent.message[..6], [0x5A, 0x12, 0x34, 0x04, 0x19, 0x01]);
    assert_eq!((sent.retries, sent.delay), (1, Duration::ZERO));
}

#[test]
fn observer_sees_every_trace_point() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let observer: Observer = Arc::new(move |event: &TraceEvent| sink.lock().push(event.clone()));

    let mut remote = Remote::builder(Recorder::default(), ProtocolKind::Cct, 0x1234)
        .with_message_id(0)
        .with_observer(observer)
        .build()
        .unwrap();
    remote.set_brightness(1, None).unwrap();

    let events = events.lock();
    let steps = events
        .iter()
        .filter(|e| matches!(e, TraceEvent::Step { phase: Phase::Initial, .. }))
        .count();
    let sent = events
        .iter()
        .filter(|e| matches!(e, TraceEvent::ButtonSent { .. }))
        .count();
    assert_eq!(steps, 10);
    assert_eq!(sent, 10);
    assert!(matches!(
        events[0],
        TraceEvent::BrightnessScaled {
            requested: 1,
            device: 0
        }
    ));
}

#[test]
fn remotes_share_one_radio() {
    let radio = Arc::new(Mutex::new(Recorder::default()));

    let rgbw = Remote::builder(Arc::clone(&radio), ProtocolKind::Rgbw, 0x0001)
        .with_message_id(0)
        .build()
        .unwrap()
        .into_shared();
    let cct = Remote::builder(Arc::clone(&radio), ProtocolKind::Cct, 0x0002)
        .with_message_id(0)
        .build()
        .unwrap()
        .into_shared();

    let workers: Vec<_> = [rgbw.clone(), rgbw.clone()]
        .into_iter()
        .map(|remote| thread::spawn(move || remote.lock().on(Some(1), false).unwrap()))
        .collect();
    for worker in workers {
        assert!(worker.join().unwrap());
    }
    assert!(cct.lock().on(None, false).unwrap());

    assert_eq!(rgbw.lock().message_id(), 2);
    assert_eq!(radio.lock().sent.len(), 3);
}
