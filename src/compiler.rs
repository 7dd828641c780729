//! Renders a [`Selections`] snapshot into a prompt for one [`Target`].
//!
//! All three renderers share the subject, action and physics clauses. The
//! output is a pure function of its inputs, so recomputing after every
//! mutation always yields the same bytes for the same state.

use serde::{Serialize, Serializer};
use tracing::{error, trace};

use crate::options::Field;
use crate::selection::Selections;
use crate::target::Target;

/// Appended to the subject clause when a demographic comes from the image.
pub const REFERENCE_MARKER: &str = " [Use Attached Reference]";

pub fn compile(selections: &Selections, is_human: bool, target: Target) -> String {
    trace!(?target, is_human, "Compiling prompt");
    match target {
        Target::Structured => render_structured(selections, is_human),
        Target::SlashCommand => render_slash_command(selections, is_human),
        Target::Narrative => render_narrative(selections, is_human),
    }
}

fn label(s: &Selections, is_human: bool, field: Field) -> &str {
    s.value_as(field, is_human).label()
}

fn raw(s: &Selections, is_human: bool, field: Field) -> &str {
    s.value_as(field, is_human).raw()
}

/// Who or what is in the shot.
pub fn subject_clause(s: &Selections, is_human: bool) -> String {
    let l = |field| label(s, is_human, field);

    if !is_human {
        return format!(
            "{}: {} (Object/Scenery).",
            l(Field::CharCount),
            l(Field::Characters)
        );
    }

    let mut clause = format!(
        "{}: {} {} {} {}",
        l(Field::CharCount),
        l(Field::Age),
        l(Field::Ethnicity),
        l(Field::Gender),
        l(Field::Characters)
    );
    let uses_reference = [Field::Gender, Field::Age, Field::Ethnicity, Field::Characters]
        .into_iter()
        .any(|field| s.value_as(field, is_human).is_reference());
    if uses_reference {
        clause.push_str(REFERENCE_MARKER);
    }

    let wear = l(Field::Wardrobe);
    let acc = l(Field::Accessories);
    if !wear.is_empty() || !acc.is_empty() {
        let with = if acc.is_empty() {
            String::new()
        } else {
            format!("with {acc}")
        };
        clause.push_str(&format!(" wearing {wear} {with}."));
    }
    clause
}

/// What the subject does. Expression is only described for people.
pub fn action_clause(s: &Selections, is_human: bool) -> String {
    if is_human {
        format!(
            "Action: {}. Expression: {}.",
            label(s, is_human, Field::Action),
            label(s, is_human, Field::Expression)
        )
    } else {
        format!("Motion: {}.", label(s, is_human, Field::Action))
    }
}

pub fn physics_clause(s: &Selections, is_human: bool) -> String {
    format!(
        "Physics: {}, {}. Background: {}.",
        label(s, is_human, Field::WindPhysics),
        label(s, is_human, Field::MotionBlur),
        label(s, is_human, Field::BgMotion)
    )
}

// ── Structured ────────────────────────────────────────────────

#[derive(Serialize)]
struct StructuredPrompt<'a> {
    meta: Meta<'a>,
    scene: Scene<'a>,
    subject: Subject<'a>,
    camera: Camera<'a>,
    physics: Physics<'a>,
    cinematography: Cinematography<'a>,
    post: Post<'a>,
    technical: Technical<'a>,
    notes: &'a str,
}

#[derive(Serialize)]
struct Meta<'a> {
    use_case: &'a str,
    resolution: &'a str,
    aspect_ratio: &'a str,
}

#[derive(Serialize)]
struct Scene<'a> {
    location_type: &'a str,
    environment: &'a str,
    time: &'a str,
    weather: &'a str,
}

#[derive(Serialize)]
struct Subject<'a> {
    description: String,
    demographics: Option<Demographics<'a>>,
    wardrobe: Option<Wardrobe<'a>>,
    action: &'a str,
    expression: Option<&'a str>,
    motion_intensity: &'a str,
}

#[derive(Serialize)]
struct Demographics<'a> {
    gender: &'a str,
    age: &'a str,
    ethnicity: &'a str,
}

#[derive(Serialize)]
struct Wardrobe<'a> {
    clothing: &'a str,
    accessories: &'a str,
}

#[derive(Serialize)]
struct Camera<'a> {
    framing: &'a str,
    angle: &'a str,
    perspective: &'a str,
    movement: &'a str,
    lens: &'a str,
    settings: Settings<'a>,
    optics: Optics<'a>,
}

#[derive(Serialize)]
struct Settings<'a> {
    #[serde(serialize_with = "serialize_number")]
    iso: Option<f64>,
    #[serde(serialize_with = "serialize_number")]
    aperture: Option<f64>,
    shutter: &'a str,
}

#[derive(Serialize)]
struct Optics<'a> {
    depth_of_field: &'a str,
    grain: &'a str,
    vignette: &'a str,
    chromatic_aberration: &'a str,
}

#[derive(Serialize)]
struct Physics<'a> {
    wind: &'a str,
    motion_blur: &'a str,
    background_motion: &'a str,
}

#[derive(Serialize)]
struct Cinematography<'a> {
    lighting: &'a str,
    source: &'a str,
    tone: &'a str,
}

#[derive(Serialize)]
struct Post<'a> {
    grade: &'a str,
    stock: &'a str,
    style: &'a str,
    audio: &'a str,
}

#[derive(Serialize)]
struct Technical<'a> {
    duration: &'a str,
    fps: &'a str,
}

/// Whole numbers are written without a fractional part (`400`, not `400.0`).
fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*n as i64)
        }
        Some(n) => serializer.serialize_f64(*n),
        None => serializer.serialize_none(),
    }
}

fn render_structured(s: &Selections, is_human: bool) -> String {
    let l = |field| label(s, is_human, field);
    let value = |field| s.value_as(field, is_human);

    let document = StructuredPrompt {
        meta: Meta {
            use_case: l(Field::UseCase),
            resolution: l(Field::Resolution),
            aspect_ratio: l(Field::AspectRatio),
        },
        scene: Scene {
            location_type: l(Field::LocationType),
            environment: l(Field::Scene),
            time: l(Field::TimeOfDay),
            weather: l(Field::Weather),
        },
        subject: Subject {
            description: subject_clause(s, is_human),
            demographics: is_human.then(|| Demographics {
                gender: l(Field::Gender),
                age: l(Field::Age),
                ethnicity: l(Field::Ethnicity),
            }),
            wardrobe: is_human.then(|| Wardrobe {
                clothing: l(Field::Wardrobe),
                accessories: l(Field::Accessories),
            }),
            action: l(Field::Action),
            expression: is_human.then(|| l(Field::Expression)),
            motion_intensity: l(Field::MotionIntensity),
        },
        camera: Camera {
            framing: l(Field::Framing),
            angle: l(Field::Angle),
            perspective: l(Field::Perspective),
            movement: l(Field::Movement),
            lens: l(Field::Lens),
            settings: Settings {
                iso: value(Field::Iso).number(),
                aperture: value(Field::Aperture).number(),
                shutter: l(Field::Shutter),
            },
            optics: Optics {
                depth_of_field: l(Field::DepthField),
                grain: l(Field::FilmGrain),
                vignette: l(Field::Vignette),
                chromatic_aberration: l(Field::Chromatic),
            },
        },
        physics: Physics {
            wind: l(Field::WindPhysics),
            motion_blur: l(Field::MotionBlur),
            background_motion: l(Field::BgMotion),
        },
        cinematography: Cinematography {
            lighting: l(Field::LightingStyle),
            source: l(Field::LightSource),
            tone: l(Field::Tone),
        },
        post: Post {
            grade: l(Field::ColorGrade),
            stock: l(Field::FilmStock),
            style: l(Field::VisualStyle),
            audio: l(Field::Audio),
        },
        technical: Technical {
            duration: raw(s, is_human, Field::Duration),
            fps: raw(s, is_human, Field::Fps),
        },
        notes: s.notes(),
    };

    match serde_json::to_string_pretty(&document) {
        Ok(json) => json,
        Err(err) => {
            error!(error = %err, "Failed to serialize structured prompt");
            String::new()
        }
    }
}

// ── Slash command ─────────────────────────────────────────────

fn render_slash_command(s: &Selections, is_human: bool) -> String {
    let l = |field| label(s, is_human, field);

    let notes = if s.notes().is_empty() {
        String::new()
    } else {
        format!(", {}", s.notes())
    };
    let ratio = s.value_as(Field::AspectRatio, is_human).aspect_ratio();
    let batch = raw(s, is_human, Field::BatchSize);
    let batch = if batch.is_empty() {
        String::new()
    } else {
        format!("--bs {batch}")
    };
    let video = if raw(s, is_human, Field::VideoToggle) == "Yes" {
        "--video"
    } else {
        ""
    };

    format!(
        "/imagine prompt: Cinematic shot of {subject} {action} Located in {location} {scene}, {time}. \
         Lighting: {lighting} {source}. Shot on {lens}, {framing}. Aesthetic: {style}, {grade}{notes} \
         --ar {ratio} {batch} {video} --v 6.0 --stylize 300 --q 2",
        subject = subject_clause(s, is_human),
        action = action_clause(s, is_human),
        location = l(Field::LocationType),
        scene = l(Field::Scene),
        time = l(Field::TimeOfDay),
        lighting = l(Field::LightingStyle),
        source = l(Field::LightSource),
        lens = l(Field::Lens),
        framing = l(Field::Framing),
        style = l(Field::VisualStyle),
        grade = l(Field::ColorGrade),
    )
}

// ── Narrative ─────────────────────────────────────────────────

fn render_narrative(s: &Selections, is_human: bool) -> String {
    let l = |field| label(s, is_human, field);
    let r = |field| raw(s, is_human, field);

    let camera_settings = [r(Field::Iso), r(Field::Aperture), r(Field::Shutter)].join(", ");
    let optics = format!(
        "Lens: {}, {}. Effects: {}, {}, {}.",
        l(Field::Lens),
        l(Field::DepthField),
        l(Field::FilmGrain),
        l(Field::Vignette),
        l(Field::Chromatic)
    );

    let mut out = format!("A {} {}. ", l(Field::Resolution), l(Field::UseCase));

    out.push_str(&format!(
        "\n\nSCENE & ATMOSPHERE:\n{}: {}. Time: {}. Weather: {}. Tone: {}. ",
        l(Field::LocationType),
        l(Field::Scene),
        l(Field::TimeOfDay),
        l(Field::Weather),
        l(Field::Tone)
    ));
    out.push_str(&format!(
        "\n\nSUBJECT & ACTION:\n{} \n{} ",
        subject_clause(s, is_human),
        action_clause(s, is_human)
    ));
    out.push_str(&format!("\n\nPHYSICS:\n{} ", physics_clause(s, is_human)));
    out.push_str(&format!(
        "\n\nCAMERA & OPTICS:\nShot on {} with {} movement. Framing: {} from {}. Perspective: {}. Settings: {}. \n{} ",
        l(Field::Lens),
        l(Field::Movement),
        l(Field::Framing),
        l(Field::Angle),
        l(Field::Perspective),
        camera_settings,
        optics
    ));
    out.push_str(&format!(
        "\n\nLIGHTING & STYLE:\nLighting: {} ({}). Style: {}. Color: {}. Stock: {}. ",
        l(Field::LightingStyle),
        l(Field::LightSource),
        l(Field::VisualStyle),
        l(Field::ColorGrade),
        l(Field::FilmStock)
    ));
    out.push_str(&format!(
        "\n\nTECHNICAL:\nDuration: {}. FPS: {}. ",
        r(Field::Duration),
        r(Field::Fps)
    ));
    out.push_str(&format!("\n\nAUDIO:\n{}.", l(Field::Audio)));
    if !s.notes().is_empty() {
        out.push_str(&format!("\n\nNOTES:\n{}", s.notes()));
    }
    out
}
