use slidepanel_graphics::Size;

/// One scripted interaction.
#[derive(Clone, Debug)]
pub enum Step {
    /// Pointer down at `from`, moves to `to` over `millis`, then lifts
    /// after `hold_millis` without moving.
    Drag {
        from: f32,
        to: f32,
        millis: i64,
        hold_millis: i64,
    },
    /// Pointer down and up in place.
    Tap { at: f32 },
    Open,
    Close,
    /// Pointer down on a moving panel, then a drag from there.
    Interrupt { after_frames: usize, to: f32 },
}

impl Step {
    pub fn describe(&self) -> String {
        match self {
            Step::Drag {
                from,
                to,
                millis,
                hold_millis,
            } => {
                let kind = if *hold_millis > 0 { "drag" } else { "fling" };
                format!("{kind} {from:.0} -> {to:.0} in {millis}ms")
            }
            Step::Tap { at } => format!("tap at {at:.0}"),
            Step::Open => "open()".to_string(),
            Step::Close => "close()".to_string(),
            Step::Interrupt { after_frames, to } => {
                format!("grab the panel after {after_frames} frames and drag to {to:.0}")
            }
        }
    }
}

/// A tour of the container: short drags that snap back, drags past halfway,
/// flings in both directions, programmatic calls and an interrupted settle.
pub fn default_script(screen: Size, peek_height: f32) -> Vec<Step> {
    let peek_line = screen.height - peek_height;
    let grab = peek_line + peek_height / 2.0;
    let travel = peek_line;
    vec![
        Step::Tap { at: grab },
        Step::Drag {
            from: grab,
            to: grab - travel * 0.2,
            millis: 300,
            hold_millis: 150,
        },
        Step::Drag {
            from: grab,
            to: grab - travel * 0.7,
            millis: 400,
            hold_millis: 150,
        },
        Step::Drag {
            from: screen.height * 0.3,
            to: screen.height * 0.4,
            millis: 60,
            hold_millis: 0,
        },
        Step::Drag {
            from: grab,
            to: grab - travel * 0.1,
            millis: 50,
            hold_millis: 0,
        },
        Step::Close,
        Step::Open,
        Step::Interrupt {
            after_frames: 6,
            to: screen.height * 0.5,
        },
        Step::Close,
    ]
}
