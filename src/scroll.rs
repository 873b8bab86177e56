use wasm_bindgen::prelude::*;

/// Offset below which the navbar is never hidden.
pub const NAV_HIDE_THRESHOLD: f64 = 40.0;

const NAV_SELECTOR: &str = ".nav";
const NAV_HIDDEN_CLASS: &str = "nav--hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

/// Direction/threshold logic for the navbar auto-hide: scrolling down past
/// the threshold hides it, anything else shows it. The previous offset is
/// updated on every sample.
pub struct ScrollObserver {
    last_y: f64,
}

impl ScrollObserver {
    pub fn new(initial_y: f64) -> Self {
        ScrollObserver { last_y: initial_y }
    }

    pub fn observe(&mut self, y: f64) -> NavVisibility {
        let visibility = if y > self.last_y && y > NAV_HIDE_THRESHOLD {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        self.last_y = y;
        visibility
    }
}

/// Wires the auto-hide behavior to the window scroll event, toggling the
/// `nav--hidden` class on the page's `.nav` element. A page without a navbar
/// installs nothing.
pub fn install_nav_autohide(window: &web_sys::Window) -> Result<(), JsValue> {
    let document = window.document().ok_or("document not available")?;
    let nav = match document.query_selector(NAV_SELECTOR)? {
        Some(el) => el,
        None => return Ok(()),
    };

    let mut observer = ScrollObserver::new(window.scroll_y().unwrap_or(0.0));
    let win = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        match observer.observe(y) {
            NavVisibility::Hidden => {
                let _ = nav.class_list().add_1(NAV_HIDDEN_CLASS);
            }
            NavVisibility::Visible => {
                let _ = nav.class_list().remove_1(NAV_HIDDEN_CLASS);
            }
        }
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    // Listener lives for the page lifetime.
    on_scroll.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(observer: &mut ScrollObserver, samples: &[f64]) -> Vec<NavVisibility> {
        samples.iter().map(|&y| observer.observe(y)).collect()
    }

    #[test]
    fn test_hides_at_first_sample_past_threshold_while_increasing() {
        let mut observer = ScrollObserver::new(0.0);
        assert_eq!(
            run(&mut observer, &[10.0, 30.0, 41.0, 80.0]),
            vec![
                NavVisibility::Visible,
                NavVisibility::Visible,
                NavVisibility::Hidden,
                NavVisibility::Hidden,
            ]
        );
    }

    #[test]
    fn test_any_decreasing_sample_shows_navbar() {
        let mut observer = ScrollObserver::new(0.0);
        observer.observe(100.0);
        assert_eq!(observer.observe(99.0), NavVisibility::Visible);
    }

    #[test]
    fn test_scrolling_down_below_threshold_stays_visible() {
        let mut observer = ScrollObserver::new(0.0);
        assert_eq!(observer.observe(20.0), NavVisibility::Visible);
        assert_eq!(observer.observe(40.0), NavVisibility::Visible);
    }

    #[test]
    fn test_unchanged_offset_stays_visible() {
        let mut observer = ScrollObserver::new(50.0);
        assert_eq!(observer.observe(50.0), NavVisibility::Visible);
    }

    #[test]
    fn test_previous_offset_updates_unconditionally() {
        let mut observer = ScrollObserver::new(0.0);
        observer.observe(100.0);
        observer.observe(50.0);
        // 60 is below 100 but above the updated previous offset of 50.
        assert_eq!(observer.observe(60.0), NavVisibility::Hidden);
    }
}
