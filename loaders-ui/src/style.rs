//! Spinner styles kept as plain data.
//!
//! A [`SpinnerStyle`] is a class name plus the declarations for the container,
//! the marker element inside it, and the keyframes driving the animation.
//! Its `Display` impl (and [`SpinnerStyle::to_css`]) turns it into stylesheet
//! text for the document head.

use std::fmt;

/// A single `property: value` pair.
pub type Declaration = (&'static str, &'static str);

/// One step of a keyframes block, e.g. `40% { transform: scale(1); }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    /// Offset selector such as `"0%, 80%, 100%"`
    pub offset: &'static str,
    pub declarations: &'static [Declaration],
}

/// A named `@keyframes` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: &'static [Keyframe],
}

/// Static visual style of one spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerStyle {
    /// Class attached to the container element
    pub class_name: &'static str,
    /// Declarations for the container
    pub container: &'static [Declaration],
    /// Declarations for the marker, applied through `.{class} > div`
    pub marker: &'static [Declaration],
    pub keyframes: Keyframes,
}

impl SpinnerStyle {
    /// Render the full stylesheet for this spinner.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SpinnerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rule(f, &format!(".{}", self.class_name), self.container)?;
        write_rule(f, &format!(".{} > div", self.class_name), self.marker)?;

        write!(f, "@keyframes {} {{", self.keyframes.name)?;
        for frame in self.keyframes.frames {
            write_rule(f, frame.offset, frame.declarations)?;
        }
        f.write_str("}")
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, selector: &str, declarations: &[Declaration]) -> fmt::Result {
    write!(f, "{} {{", selector)?;
    for (property, value) in declarations {
        write!(f, " {}: {};", property, value)?;
    }
    f.write_str(" }")
}

/// Ball that scales in and out.
pub const BALL_PULSE_ROUND: SpinnerStyle = SpinnerStyle {
    class_name: "ball-pulse-round",
    container: &[
        ("display", "inline-block"),
        ("position", "relative"),
        ("width", "10px"),
        ("height", "10px"),
    ],
    marker: &[
        ("width", "10px"),
        ("height", "10px"),
        ("background-color", "#fff"),
        ("border-radius", "100%"),
        ("animation", "ball-pulse-round 1.2s infinite ease-in-out"),
        ("animation-fill-mode", "both"),
    ],
    keyframes: Keyframes {
        name: "ball-pulse-round",
        frames: &[
            Keyframe {
                offset: "0%, 80%, 100%",
                declarations: &[("transform", "scale(0)")],
            },
            Keyframe {
                offset: "40%",
                declarations: &[("transform", "scale(1)")],
            },
        ],
    },
};

/// Border-drawn triangle flipped around both axes.
pub const TRIANGLE_SKEW_SPIN: SpinnerStyle = SpinnerStyle {
    class_name: "triangle-skew-spin",
    container: &[
        ("display", "inline-block"),
        ("position", "relative"),
        ("width", "40px"),
        ("height", "20px"),
    ],
    marker: &[
        ("width", "0"),
        ("height", "0"),
        ("border-left", "20px solid transparent"),
        ("border-right", "20px solid transparent"),
        ("border-bottom", "20px solid #fff"),
        (
            "animation",
            "triangle-skew-spin 3s 0s cubic-bezier(.09, .57, .49, .9) infinite",
        ),
        ("animation-fill-mode", "both"),
    ],
    keyframes: Keyframes {
        name: "triangle-skew-spin",
        frames: &[
            Keyframe {
                offset: "25%",
                declarations: &[("transform", "perspective(100px) rotateX(180deg) rotateY(0)")],
            },
            Keyframe {
                offset: "50%",
                declarations: &[(
                    "transform",
                    "perspective(100px) rotateX(180deg) rotateY(180deg)",
                )],
            },
            Keyframe {
                offset: "75%",
                declarations: &[("transform", "perspective(100px) rotateX(0) rotateY(180deg)")],
            },
            Keyframe {
                offset: "100%",
                declarations: &[("transform", "perspective(100px) rotateX(0) rotateY(0)")],
            },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_is_deterministic() {
        assert_eq!(BALL_PULSE_ROUND.to_css(), BALL_PULSE_ROUND.to_css());
        assert_eq!(BALL_PULSE_ROUND.to_css(), format!("{}", BALL_PULSE_ROUND));
        assert_eq!(TRIANGLE_SKEW_SPIN.to_css(), TRIANGLE_SKEW_SPIN.to_css());
    }

    #[test]
    fn test_to_css_contains_rules() {
        let css = BALL_PULSE_ROUND.to_css();
        assert!(css.starts_with(".ball-pulse-round { display: inline-block;"));
        assert!(css.contains(".ball-pulse-round > div { width: 10px;"));
        assert!(css.contains("animation: ball-pulse-round 1.2s infinite ease-in-out;"));
        assert!(css.contains("@keyframes ball-pulse-round {0%, 80%, 100% { transform: scale(0); }"));
        assert!(css.ends_with("40% { transform: scale(1); }}"));
    }

    #[test]
    fn test_small_style() {
        const TINY: SpinnerStyle = SpinnerStyle {
            class_name: "tiny",
            container: &[("color", "red")],
            marker: &[],
            keyframes: Keyframes {
                name: "tiny",
                frames: &[Keyframe {
                    offset: "50%",
                    declarations: &[("opacity", "0")],
                }],
            },
        };
        assert_eq!(
            TINY.to_css(),
            ".tiny { color: red; }.tiny > div { }@keyframes tiny {50% { opacity: 0; }}"
        );
    }

    #[test]
    fn test_keyframes_name_matches_class() {
        for style in [BALL_PULSE_ROUND, TRIANGLE_SKEW_SPIN] {
            assert_eq!(style.class_name, style.keyframes.name);
            assert!(style
                .marker
                .iter()
                .any(|(p, v)| *p == "animation" && v.starts_with(style.keyframes.name)));
        }
    }
}
