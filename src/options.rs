//! Static catalogue of the selectable values for every field.
//!
//! Lists are plain `&'static` slices. Fields where an attached reference
//! image can stand in for the text value are built with [`with_reference`],
//! which makes pickers offer [`REFERENCE_SENTINEL`] after the listed values.
//! The sentinel itself is never stored in a list.

/// Display string for "derive this attribute from the attached image".
pub const REFERENCE_SENTINEL: &str = "[ 📷 Reference Image ]";

/// Ordered values for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionList {
    values: &'static [&'static str],
    reference: bool,
}

/// A list whose field may also take the reference sentinel.
pub const fn with_reference(values: &'static [&'static str]) -> OptionList {
    OptionList {
        values,
        reference: true,
    }
}

/// A list of pure technical values (counters, toggles) without the sentinel.
pub const fn plain(values: &'static [&'static str]) -> OptionList {
    OptionList {
        values,
        reference: false,
    }
}

impl OptionList {
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    pub fn accepts_reference(&self) -> bool {
        self.reference
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.values.get(index).copied()
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Everything a picker shows, sentinel last when accepted.
    pub fn entries(&self) -> Vec<&'static str> {
        let mut entries = self.values.to_vec();
        if self.reference {
            entries.push(REFERENCE_SENTINEL);
        }
        entries
    }
}

// ── Format ────────────────────────────────────────────────────

pub const USE_CASE: OptionList = with_reference(&[
    "Cinematic Feature Film Shot",
    "High-End TV Commercial",
    "Music Video Visualizer",
    "Documentary Footage",
    "Video Game Cutscene (Unreal 5)",
    "Abstract Art Installation",
    "Social Media Viral Hook",
]);
pub const ASPECT_RATIO: OptionList = with_reference(&[
    "2.39:1 (Anamorphic)",
    "16:9 (Standard)",
    "9:16 (Vertical)",
    "4:3 (Classic)",
    "1:1 (Square)",
    "4:5 (Social)",
]);
pub const RESOLUTION: OptionList = with_reference(&["4K (UHD)", "8K (Raw)", "1080p (HD)"]);

// ── Set & location ────────────────────────────────────────────

pub const LOCATION_TYPE: OptionList = with_reference(&[
    "Exterior",
    "Interior",
    "Studio Set",
    "Abstract Void",
    "Urban City",
]);
pub const SCENE: OptionList = with_reference(&[
    "Neon Tokyo Streets",
    "Blooming Flower Field",
    "Lush Green Mountains",
    "Post-Apocalyptic Ruins",
    "Medieval Throne Room",
    "Mars Colony",
    "Victorian Mansion",
    "California Beach",
    "Deep Space Station",
]);
pub const TIME_OF_DAY: OptionList = with_reference(&[
    "Bright Daylight",
    "Golden Hour",
    "Blue Hour",
    "High Noon",
    "Night",
    "Midnight",
    "Dawn",
]);
pub const WEATHER: OptionList = with_reference(&[
    "Clear Sky",
    "Rainbow",
    "Heavy Rain",
    "Fog & Mist",
    "Snowstorm",
    "Sandstorm",
    "Overcast",
]);

// ── Subject ───────────────────────────────────────────────────

/// Cast size value that marks the subject as an object or scenery.
pub const NO_HUMANS: &str = "No Humans";

pub const CHAR_COUNT: OptionList = with_reference(&[
    "Single Subject",
    "Two Subjects",
    "Small Group",
    "Large Crowd",
    NO_HUMANS,
]);
pub const GENDER: OptionList = with_reference(&["Female", "Male", "Non-Binary"]);
pub const AGE: OptionList = with_reference(&[
    "Baby",
    "Child",
    "Teenager",
    "20s",
    "30s",
    "Middle Aged",
    "Elderly",
]);
pub const ETHNICITY: OptionList = with_reference(&[
    "Japanese",
    "White (Blond)",
    "White (Dark Hair)",
    "African",
    "Arabic",
    "Latino",
    "Indian",
    "Native American",
    "Fantasy",
]);
pub const CHARACTERS: OptionList = with_reference(&[
    "Gritty Soldier",
    "Cyberpunk Android",
    "Ethereal Model",
    "Samurai Warrior",
    "Modern Dancer",
    "Astronaut",
    "Office Worker",
    "Doctor",
    "Floating Girl",
]);
pub const WARDROBE: OptionList = with_reference(&[
    "Casual T-Shirt/Jeans",
    "Formal Suit/Gown",
    "Sci-Fi Armor",
    "Traditional Robes",
    "Tactical Gear",
    "Vintage 80s",
    "Distressed",
]);
pub const ACCESSORIES: OptionList = with_reference(&[
    "None",
    "Earrings",
    "Necklace",
    "Glasses",
    "Backpack",
    "Cybernetics",
]);
pub const NON_HUMAN_SUBJECTS: OptionList = with_reference(&[
    "Futuristic Vehicle",
    "Ancient Artifact",
    "Exotic Flower",
    "Glass Sculpture",
    "Cybernetic Weapon",
    "Haunted Doll",
    "Floating Monolith",
    "Delicious Food",
]);
pub const NON_HUMAN_ACTIONS: OptionList = with_reference(&[
    "Stationary",
    "Floating",
    "Falling",
    "Spinning",
    "Exploding",
    "Melting",
    "Blooming",
    "Pulsing",
]);

// ── Camera & optics ───────────────────────────────────────────

pub const FRAMING: OptionList = with_reference(&[
    "Medium Shot",
    "Wide Shot",
    "Extreme Wide",
    "Close-Up",
    "Extreme Close-Up",
    "Cowboy Shot",
    "Two Shot",
]);
pub const ANGLE: OptionList = with_reference(&[
    "Eye-Level",
    "Low Angle",
    "High Angle",
    "Overhead",
    "Dutch Angle",
    "Ground Level",
]);
pub const PERSPECTIVE: OptionList = with_reference(&[
    "Frontal View",
    "Side Profile",
    "From Behind",
    "Over-The-Shoulder",
    "POV",
    "Snorriecam",
    "Third-Person View",
]);
pub const MOVEMENT: OptionList = with_reference(&[
    "Static Tripod",
    "Push-In",
    "Pull-Out",
    "Tracking Shot",
    "Fly-Through",
    "Glide Over",
    "Orbit",
    "Handheld",
    "Steadicam",
    "Drone Flyover",
]);
pub const LENS: OptionList = with_reference(&[
    "35mm",
    "50mm",
    "85mm",
    "24mm",
    "Anamorphic",
    "Laowa Probe",
    "Split Diopter",
    "Tilt-Shift",
]);
pub const ISO: OptionList = with_reference(&[
    "ISO 100", "ISO 200", "ISO 400", "ISO 800", "ISO 1600", "ISO 3200",
]);
pub const APERTURE: OptionList = with_reference(&[
    "f/1.4", "f/1.8", "f/2.8", "f/4", "f/5.6", "f/8", "f/11",
]);
pub const SHUTTER: OptionList =
    with_reference(&["1/24", "1/48", "1/50", "1/96", "Slow Shutter"]);
pub const DEPTH_FIELD: OptionList = with_reference(&[
    "Shallow Depth of Field",
    "Deep Focus",
    "Rack Focus",
    "Tilt-Shift Blur",
]);
pub const FILM_GRAIN: OptionList =
    with_reference(&["Off", "Light Grain", "Medium Grain", "Heavy Grain"]);
pub const VIGNETTE: OptionList = with_reference(&["Off", "Subtle", "Strong"]);
pub const CHROMATIC: OptionList = with_reference(&["Off", "Subtle", "Strong"]);

// ── Physics & mood ────────────────────────────────────────────

pub const ACTION: OptionList = with_reference(&[
    "Standing Still",
    "Walking",
    "Running",
    "Flying",
    "Fighting",
    "Dancing",
    "Driving",
    "Posing",
]);
pub const MOTION_INTENSITY: OptionList = with_reference(&[
    "Static",
    "Slow Motion",
    "Normal Speed",
    "Fast",
    "Hyper-Speed",
]);
pub const EXPRESSION: OptionList = with_reference(&[
    "Stoic",
    "Joyful",
    "Terrified",
    "Crying",
    "Seductive",
    "Focused",
    "Angry",
]);
pub const LIGHTING_STYLE: OptionList = with_reference(&[
    "Naturalistic",
    "Low-Key",
    "High-Key",
    "Film Noir",
    "Studio",
    "Rembrandt",
]);
pub const LIGHT_SOURCE: OptionList = with_reference(&[
    "Sunlight",
    "Street Lights",
    "Neon Signs",
    "Moonlight",
    "Mixed Sources",
    "Fire",
]);
pub const TONE: OptionList = with_reference(&[
    "Neutral",
    "Moody",
    "Exhilarating",
    "Tense",
    "Romantic",
    "Cold",
    "Ethereal",
]);
pub const MOTION_BLUR: OptionList =
    with_reference(&["Off", "Subtle Blur", "Strong Blur", "Long-Exposure"]);
pub const WIND_PHYSICS: OptionList =
    with_reference(&["Still Air", "Light Breeze", "Strong Wind", "Turbulence"]);
pub const BG_MOTION: OptionList = with_reference(&[
    "None",
    "Train Passing",
    "Cars Streaking",
    "Crowd Moving",
    "Trees Swaying",
    "Clouds Moving",
]);

// ── Post ──────────────────────────────────────────────────────

pub const VISUAL_STYLE: OptionList = with_reference(&[
    "Photorealistic",
    "Cinematic Lighting",
    "Analog Film",
    "Hyper-realistic",
    "Prism Photography",
    "Pixel Art",
    "3D Octane Render",
    "Anime Style",
    "Oil Painting",
    "Flat Design",
    "Cyberpunk Synthwave",
]);
pub const COLOR_GRADE: OptionList = with_reference(&[
    "Teal & Orange",
    "Bleach Bypass",
    "Vivid Pop",
    "Monochromatic",
    "Vintage Sepia",
    "Moody Dark",
    "Cyberpunk Neon",
]);
pub const FILM_STOCK: OptionList = with_reference(&[
    "Digital Clean",
    "Kodak Portra 400",
    "Fujifilm Velvia",
    "VHS Tape",
    "16mm Film",
    "IMAX",
]);
pub const AUDIO: OptionList = with_reference(&[
    "No Audio",
    "Immersive Nature",
    "Epic Orchestra",
    "City Noise",
    "Deep Drones",
    "Voiceover",
    "Foley",
]);

// ── Technical ─────────────────────────────────────────────────

pub const DURATION: OptionList = plain(&["3s", "5s", "8s", "12s"]);
pub const FPS: OptionList = plain(&["24", "30", "60"]);
pub const BATCH_SIZE: OptionList = plain(&["1", "2", "3", "4"]);
pub const VIDEO_TOGGLE: OptionList = plain(&["No", "Yes"]);

/// Every field backed by an option list. `notes` is free text and lives
/// outside this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    UseCase,
    AspectRatio,
    Resolution,
    Duration,
    Fps,
    BatchSize,
    VideoToggle,
    LocationType,
    Scene,
    TimeOfDay,
    Weather,
    CharCount,
    Gender,
    Age,
    Ethnicity,
    Characters,
    Wardrobe,
    Accessories,
    Action,
    MotionIntensity,
    Expression,
    MotionBlur,
    WindPhysics,
    BgMotion,
    Framing,
    Angle,
    Perspective,
    Movement,
    Lens,
    Iso,
    Aperture,
    Shutter,
    FilmGrain,
    Vignette,
    Chromatic,
    DepthField,
    LightingStyle,
    LightSource,
    Tone,
    VisualStyle,
    ColorGrade,
    FilmStock,
    Audio,
}

impl Field {
    pub const ALL: [Field; 43] = [
        Field::UseCase,
        Field::AspectRatio,
        Field::Resolution,
        Field::Duration,
        Field::Fps,
        Field::BatchSize,
        Field::VideoToggle,
        Field::LocationType,
        Field::Scene,
        Field::TimeOfDay,
        Field::Weather,
        Field::CharCount,
        Field::Gender,
        Field::Age,
        Field::Ethnicity,
        Field::Characters,
        Field::Wardrobe,
        Field::Accessories,
        Field::Action,
        Field::MotionIntensity,
        Field::Expression,
        Field::MotionBlur,
        Field::WindPhysics,
        Field::BgMotion,
        Field::Framing,
        Field::Angle,
        Field::Perspective,
        Field::Movement,
        Field::Lens,
        Field::Iso,
        Field::Aperture,
        Field::Shutter,
        Field::FilmGrain,
        Field::Vignette,
        Field::Chromatic,
        Field::DepthField,
        Field::LightingStyle,
        Field::LightSource,
        Field::Tone,
        Field::VisualStyle,
        Field::ColorGrade,
        Field::FilmStock,
        Field::Audio,
    ];

    /// Stable external name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::UseCase => "useCase",
            Field::AspectRatio => "aspectRatio",
            Field::Resolution => "resolution",
            Field::Duration => "duration",
            Field::Fps => "fps",
            Field::BatchSize => "batchSize",
            Field::VideoToggle => "videoToggle",
            Field::LocationType => "locationType",
            Field::Scene => "scene",
            Field::TimeOfDay => "timeOfDay",
            Field::Weather => "weather",
            Field::CharCount => "charCount",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Ethnicity => "ethnicity",
            Field::Characters => "characters",
            Field::Wardrobe => "wardrobe",
            Field::Accessories => "accessories",
            Field::Action => "action",
            Field::MotionIntensity => "motionIntensity",
            Field::Expression => "expression",
            Field::MotionBlur => "motionBlur",
            Field::WindPhysics => "windPhysics",
            Field::BgMotion => "bgMotion",
            Field::Framing => "framing",
            Field::Angle => "angle",
            Field::Perspective => "perspective",
            Field::Movement => "movement",
            Field::Lens => "lens",
            Field::Iso => "iso",
            Field::Aperture => "aperture",
            Field::Shutter => "shutter",
            Field::FilmGrain => "filmGrain",
            Field::Vignette => "vignette",
            Field::Chromatic => "chromatic",
            Field::DepthField => "depthField",
            Field::LightingStyle => "lightingStyle",
            Field::LightSource => "lightSource",
            Field::Tone => "tone",
            Field::VisualStyle => "visualStyle",
            Field::ColorGrade => "colorGrade",
            Field::FilmStock => "filmStock",
            Field::Audio => "audio",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The list backing this field. Only `characters` and `action` depend on
    /// whether the subject is human.
    pub fn options(self, is_human: bool) -> OptionList {
        match self {
            Field::UseCase => USE_CASE,
            Field::AspectRatio => ASPECT_RATIO,
            Field::Resolution => RESOLUTION,
            Field::Duration => DURATION,
            Field::Fps => FPS,
            Field::BatchSize => BATCH_SIZE,
            Field::VideoToggle => VIDEO_TOGGLE,
            Field::LocationType => LOCATION_TYPE,
            Field::Scene => SCENE,
            Field::TimeOfDay => TIME_OF_DAY,
            Field::Weather => WEATHER,
            Field::CharCount => CHAR_COUNT,
            Field::Gender => GENDER,
            Field::Age => AGE,
            Field::Ethnicity => ETHNICITY,
            Field::Characters if is_human => CHARACTERS,
            Field::Characters => NON_HUMAN_SUBJECTS,
            Field::Wardrobe => WARDROBE,
            Field::Accessories => ACCESSORIES,
            Field::Action if is_human => ACTION,
            Field::Action => NON_HUMAN_ACTIONS,
            Field::MotionIntensity => MOTION_INTENSITY,
            Field::Expression => EXPRESSION,
            Field::MotionBlur => MOTION_BLUR,
            Field::WindPhysics => WIND_PHYSICS,
            Field::BgMotion => BG_MOTION,
            Field::Framing => FRAMING,
            Field::Angle => ANGLE,
            Field::Perspective => PERSPECTIVE,
            Field::Movement => MOVEMENT,
            Field::Lens => LENS,
            Field::Iso => ISO,
            Field::Aperture => APERTURE,
            Field::Shutter => SHUTTER,
            Field::FilmGrain => FILM_GRAIN,
            Field::Vignette => VIGNETTE,
            Field::Chromatic => CHROMATIC,
            Field::DepthField => DEPTH_FIELD,
            Field::LightingStyle => LIGHTING_STYLE,
            Field::LightSource => LIGHT_SOURCE,
            Field::Tone => TONE,
            Field::VisualStyle => VISUAL_STYLE,
            Field::ColorGrade => COLOR_GRADE,
            Field::FilmStock => FILM_STOCK,
            Field::Audio => AUDIO,
        }
    }

    /// Index of the value a fresh session starts with.
    pub fn default_index(self) -> usize {
        match self {
            Field::Duration => 1,
            Field::Scene => 1,
            Field::Age => 2,
            Field::Characters => 8,
            Field::Action => 3,
            Field::MotionIntensity => 3,
            Field::Framing => 1,
            Field::Perspective => 2,
            Field::Movement => 3,
            Field::Iso => 2,
            Field::Aperture => 1,
            Field::Shutter => 1,
            Field::Audio => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
