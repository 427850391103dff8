//! Authored course content. Coordinates are `[x, y, z]` with `y` as elevation;
//! courses run toward negative `z`.

use std::borrow::Cow;

use crate::zone::{Color, Zone};

pub(super) const EXTREME_FLUME_WAYPOINTS: &[[f64; 3]] = &[
    [0.0, 460.0, 0.0],
    [-5.0, 458.0, -50.0],
    [8.0, 456.0, -100.0],
    [-3.0, 454.0, -150.0],
    [5.0, 452.0, -200.0],
    [0.0, 450.0, -250.0],
    [-8.0, 448.0, -300.0],
    [0.0, 446.0, -400.0],
    [12.0, 443.0, -450.0],
    [15.0, 440.0, -500.0],
    [10.0, 436.0, -550.0],
    [-10.0, 432.0, -600.0],
    [-15.0, 428.0, -650.0],
    [-8.0, 424.0, -700.0],
    [0.0, 420.0, -750.0],
    [10.0, 416.0, -800.0],
    [5.0, 412.0, -850.0],
    [0.0, 408.0, -900.0],
    [-5.0, 403.0, -950.0],
    [-8.0, 398.0, -1000.0],
    [0.0, 392.0, -1050.0],
    [8.0, 386.0, -1100.0],
    [5.0, 380.0, -1150.0],
    [-5.0, 373.0, -1200.0],
    [0.0, 366.0, -1250.0],
    [-5.0, 358.0, -1300.0],
    [0.0, 350.0, -1350.0],
    [5.0, 341.0, -1400.0],
    [-5.0, 332.0, -1450.0],
    [0.0, 323.0, -1500.0],
    [5.0, 313.0, -1550.0],
    [-5.0, 303.0, -1600.0],
    [0.0, 293.0, -1650.0],
    [0.0, 283.0, -1700.0],
    [5.0, 273.0, -1750.0],
    [-5.0, 261.0, -1800.0],
    [0.0, 248.0, -1850.0],
    [5.0, 234.0, -1900.0],
    [-5.0, 218.0, -1950.0],
    [0.0, 200.0, -2000.0],
    [0.0, 198.0, -2050.0],
    [0.0, 173.0, -2100.0],
    [0.0, 170.0, -2150.0],
    [0.0, 135.0, -2200.0],
    [0.0, 128.0, -2250.0],
    [0.0, 98.0, -2270.0],
    [0.0, 58.0, -2285.0],
    [0.0, 28.0, -2295.0],
    [0.0, 0.0, -2300.0],
    [0.0, 0.0, -2350.0],
];

pub(super) const EXTREME_FLUME_ZONES: &[Zone] = &[
    Zone {
        name: Cow::Borrowed("Peaceful Forest"),
        start_distance: 0.0,
        end_distance: 400.0,
        fog_color: Color::from_hex(0x87ceeb),
        fog_density: 0.0001,
        ambient_color: Color::from_hex(0xffffbb),
        directional_intensity: 0.8,
        background_color: Color::from_hex(0x87ceeb),
        description: Cow::Borrowed("Gentle waters, birdsong, tutorial zone"),
    },
    Zone {
        name: Cow::Borrowed("Canyon Rapids"),
        start_distance: 400.0,
        end_distance: 900.0,
        fog_color: Color::from_hex(0xff8844),
        fog_density: 0.001,
        ambient_color: Color::from_hex(0xff9955),
        directional_intensity: 1.0,
        background_color: Color::from_hex(0xcc7744),
        description: Cow::Borrowed("Fast drops, tight turns, orange sunset canyon"),
    },
    Zone {
        name: Cow::Borrowed("Dark Cave"),
        start_distance: 900.0,
        end_distance: 1400.0,
        fog_color: Color::from_hex(0x000011),
        fog_density: 0.05,
        ambient_color: Color::from_hex(0x2244ff),
        directional_intensity: 0.2,
        background_color: Color::from_hex(0x000000),
        description: Cow::Borrowed("Mysterious darkness, glowing crystals, suspense"),
    },
    Zone {
        name: Cow::Borrowed("Lift Hill"),
        start_distance: 1400.0,
        end_distance: 1750.0,
        fog_color: Color::from_hex(0x87ceeb),
        fog_density: 0.0005,
        ambient_color: Color::from_hex(0xffffdd),
        directional_intensity: 1.2,
        background_color: Color::from_hex(0x87ceeb),
        description: Cow::Borrowed("Ascending to the heavens, epic vista, anticipation"),
    },
    Zone {
        name: Cow::Borrowed("The MEGA Drop"),
        start_distance: 1750.0,
        end_distance: 1860.0,
        fog_color: Color::from_hex(0xffffff),
        fog_density: 0.002,
        ambient_color: Color::from_hex(0xffffff),
        directional_intensity: 1.5,
        background_color: Color::from_hex(0x87ceeb),
        description: Cow::Borrowed("75-foot free fall, the ultimate thrill"),
    },
    Zone {
        name: Cow::Borrowed("Victory Lap"),
        start_distance: 1860.0,
        end_distance: 2100.0,
        fog_color: Color::from_hex(0xffdd88),
        fog_density: 0.0003,
        ambient_color: Color::from_hex(0xffffcc),
        directional_intensity: 0.9,
        background_color: Color::from_hex(0x87ceeb),
        description: Cow::Borrowed("Celebration, final score, gentle float"),
    },
];

// Rises at 220, 580 and 1100 are spray ridges; enforcement levels them.
pub(super) const CANYON_RUN_WAYPOINTS: &[[f64; 3]] = &[
    [0.0, 320.0, 0.0],
    [10.0, 318.0, -80.0],
    [25.0, 317.0, -160.0],
    [20.0, 321.0, -220.0],
    [0.0, 316.0, -300.0],
    [-15.0, 300.0, -320.0],
    [-20.0, 298.0, -420.0],
    [-5.0, 296.0, -520.0],
    [15.0, 299.0, -580.0],
    [20.0, 280.0, -600.0],
    [10.0, 278.0, -700.0],
    [-10.0, 276.0, -800.0],
    [-25.0, 250.0, -820.0],
    [-20.0, 248.0, -950.0],
    [0.0, 246.0, -1050.0],
    [15.0, 249.0, -1100.0],
    [10.0, 200.0, -1130.0],
    [0.0, 198.0, -1250.0],
    [0.0, 197.0, -1400.0],
];

pub(super) const CANYON_RUN_ZONES: &[Zone] = &[
    Zone {
        name: Cow::Borrowed("Headwaters"),
        start_distance: 0.0,
        end_distance: 300.0,
        fog_color: Color::from_hex(0x9fd8ef),
        fog_density: 0.0002,
        ambient_color: Color::from_hex(0xfff4d6),
        directional_intensity: 1.0,
        background_color: Color::from_hex(0x9fd8ef),
        description: Cow::Borrowed("Wide slow water below the rim"),
    },
    Zone {
        name: Cow::Borrowed("Red Rock Narrows"),
        start_distance: 300.0,
        end_distance: 650.0,
        fog_color: Color::from_hex(0xc8643c),
        fog_density: 0.0015,
        ambient_color: Color::from_hex(0xffa070),
        directional_intensity: 1.1,
        background_color: Color::from_hex(0xb5532e),
        description: Cow::Borrowed("Sheer walls, short chutes, warm light"),
    },
    Zone {
        name: Cow::Borrowed("Echo Falls"),
        start_distance: 650.0,
        end_distance: 1000.0,
        fog_color: Color::from_hex(0x6f8fa8),
        fog_density: 0.004,
        ambient_color: Color::from_hex(0xb0c8e0),
        directional_intensity: 0.7,
        background_color: Color::from_hex(0x4d6a80),
        description: Cow::Borrowed("Mist from the falls, cool shade"),
    },
    Zone {
        name: Cow::Borrowed("Thunder Chute"),
        start_distance: 1000.0,
        end_distance: 1200.0,
        fog_color: Color::from_hex(0xf0f0f0),
        fog_density: 0.003,
        ambient_color: Color::from_hex(0xffffff),
        directional_intensity: 1.4,
        background_color: Color::from_hex(0x87ceeb),
        description: Cow::Borrowed("The big plunge off the canyon lip"),
    },
    Zone {
        name: Cow::Borrowed("Still Pool"),
        start_distance: 1200.0,
        end_distance: 1500.0,
        fog_color: Color::from_hex(0xffe0a0),
        fog_density: 0.0004,
        ambient_color: Color::from_hex(0xfff0c8),
        directional_intensity: 0.9,
        background_color: Color::from_hex(0xf4b860),
        description: Cow::Borrowed("Golden hour drift to the dock"),
    },
];

pub(super) const KIDDIE_CREEK_WAYPOINTS: &[[f64; 3]] = &[
    [0.0, 40.0, 0.0],
    [5.0, 39.0, -30.0],
    [-5.0, 38.0, -60.0],
    [0.0, 36.0, -90.0],
    [6.0, 35.0, -120.0],
    [0.0, 32.0, -150.0],
    [0.0, 31.0, -200.0],
];

pub(super) const KIDDIE_CREEK_ZONES: &[Zone] = &[
    Zone {
        name: Cow::Borrowed("Meadow"),
        start_distance: 0.0,
        end_distance: 120.0,
        fog_color: Color::from_hex(0xcfefff),
        fog_density: 0.0001,
        ambient_color: Color::from_hex(0xffffee),
        directional_intensity: 1.0,
        background_color: Color::from_hex(0xcfefff),
        description: Cow::Borrowed("Lily pads and dragonflies"),
    },
    Zone {
        name: Cow::Borrowed("Duck Pond"),
        start_distance: 120.0,
        end_distance: 250.0,
        fog_color: Color::from_hex(0xe8f4d0),
        fog_density: 0.0002,
        ambient_color: Color::from_hex(0xffffdd),
        directional_intensity: 0.9,
        background_color: Color::from_hex(0xbfe3a0),
        description: Cow::Borrowed("A splash at the little slide and home"),
    },
];
