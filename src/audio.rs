use crate::dom;
use missed_call_core::{AudioDeck, AudioSink, Track};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One `<audio>` element driven as a track.
pub struct MediaSink {
    id: &'static str,
    el: web::HtmlAudioElement,
}

impl MediaSink {
    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.el
    }
}

impl AudioSink for MediaSink {
    fn play(&self) {
        self.el.set_muted(false);
        match self.el.play() {
            Ok(promise) => {
                let id = self.id;
                // Autoplay policy rejections land here; the next gesture retries.
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::error!("[audio] {} playback failed: {:?}", id, e);
                    }
                });
            }
            Err(e) => log::error!("[audio] {} play() threw: {:?}", self.id, e),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.el.pause() {
            log::warn!("[audio] {} pause failed: {:?}", self.id, e);
        }
    }

    fn set_volume(&self, volume: f32) {
        self.el.set_volume(volume as f64);
    }

    fn rewind(&self) {
        self.el.set_current_time(0.0);
    }

    fn is_paused(&self) -> bool {
        self.el.paused()
    }
}

/// All tracks found in the document.
pub struct AudioBank {
    sinks: Vec<(Track, MediaSink)>,
}

impl AudioDeck for AudioBank {
    type Sink = MediaSink;

    fn sink(&self, track: Track) -> Option<&MediaSink> {
        self.sinks.iter().find(|(t, _)| *t == track).map(|(_, s)| s)
    }
}

impl AudioBank {
    pub fn from_document(document: &web::Document) -> Self {
        let sinks = Track::ALL
            .iter()
            .filter_map(|&track| {
                let el = dom::by_id(document, track.element_id())?
                    .dyn_into::<web::HtmlAudioElement>()
                    .map_err(|_| log::warn!("[audio] #{} is not <audio>", track.element_id()))
                    .ok()?;
                Some((
                    track,
                    MediaSink {
                        id: track.element_id(),
                        el,
                    },
                ))
            })
            .collect::<Vec<_>>();
        log::info!("[audio] {} of {} tracks present", sinks.len(), Track::ALL.len());
        Self { sinks }
    }

    /// Ambient tracks start silent and preloaded, with load results logged.
    pub fn prepare_ambient(&self) {
        for track in [Track::Thunder, Track::Birds] {
            let Some(sink) = self.sink(track) else {
                continue;
            };
            let el = sink.element();
            el.set_volume(0.0);
            el.set_preload("auto");
            let id = track.element_id();
            dom::on(el, "canplaythrough", move |_: web::Event| {
                log::info!("[audio] {} loaded", id);
            });
            dom::on(el, "error", move |e: web::Event| {
                log::error!("[audio] {} failed to load: {:?}", id, e.type_());
            });
        }
    }

    /// Play and immediately stop `track` so later scripted playback is allowed.
    pub fn prime(&self, track: Track) {
        let Some(sink) = self.sink(track) else {
            return;
        };
        if !sink.is_paused() {
            return;
        }
        let el = sink.element().clone();
        let promise = match el.play() {
            Ok(p) => p,
            Err(e) => {
                log::error!("[audio] priming {} threw: {:?}", track.element_id(), e);
                return;
            }
        };
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    _ = el.pause();
                    el.set_current_time(0.0);
                    log::info!("[audio] primed {}", el.id());
                }
                Err(e) => log::error!("[audio] priming {} failed: {:?}", el.id(), e),
            }
        });
    }
}
