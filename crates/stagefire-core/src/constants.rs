//! Gameplay constants and tuning defaults.
//!
//! Tuning values seed `GameConfig`'s presets. Playfield geometry is read
//! directly by world setup.

/// Frame rate of the host update loop (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f32 = 1536.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f32 = 640.0;

/// Player start position.
pub const PLAYER_START: [f32; 2] = [300.0, 300.0];

/// Ground body center and size.
pub const GROUND_CENTER: [f32; 2] = [768.0, 600.0];
pub const GROUND_SIZE: [f32; 2] = [1536.0, 40.0];

/// Side barrier thickness.
pub const BARRIER_WIDTH: f32 = 20.0;

/// One-way platforms as (center_x, center_y, width, height).
pub const PLATFORMS: [[f32; 4]; 3] = [
    [292.5, 410.0, 215.0, 40.0],
    [1065.0, 455.0, 170.0, 30.0],
    [1267.5, 315.0, 175.0, 40.0],
];

/// How far below a platform top a falling body may be and still land.
pub const ONE_WAY_TOLERANCE: f32 = 10.0;

// --- Player ---

/// Player bounding box (scaled sprite footprint).
pub const PLAYER_SIZE: [f32; 2] = [40.0, 56.0];

pub const PLAYER_MAX_HEALTH: u32 = 25;

/// Horizontal speed at the baseline speed stat (px/s).
pub const PLAYER_BASE_MOVE_SPEED: f32 = 200.0;

/// Speed stat at which the player moves at exactly `PLAYER_BASE_MOVE_SPEED`.
pub const BASELINE_SPEED_STAT: u32 = 5;

pub const PLAYER_BASE_BULLET_DAMAGE: u32 = 5;

/// Upward jump velocity, classic tuning (px/s, negative is up).
pub const JUMP_IMPULSE_CLASSIC: f32 = -500.0;

/// Upward jump velocity, arena tuning.
pub const JUMP_IMPULSE_ARENA: f32 = -600.0;

// --- Bullets ---

pub const BULLET_SIZE: [f32; 2] = [16.0, 8.0];

pub const BULLET_SPEED: f32 = 800.0;

/// Horizontal offset from the player center at which bullets appear.
pub const BULLET_SPAWN_OFFSET: f32 = 20.0;

/// Bullets further than this outside the playfield are removed.
pub const BULLET_BOUNDS_MARGIN: f32 = 50.0;

// --- Enemies ---

pub const ENEMY_SIZE: [f32; 2] = [40.0, 56.0];

pub const ENEMY_BASE_HEALTH: u32 = 5;

/// Chase speed per stage (px/s).
pub const ENEMY_BASE_SPEED: f32 = 60.0;

/// Enemy spawn points (x, y).
pub const SPAWN_POINTS: [[f32; 2]; 2] = [[260.0, 100.0], [1380.0, 100.0]];

pub const SPAWN_INTERVAL_MS: u64 = 2000;

/// Live-enemy cap on stage 1 (arena tuning).
pub const ENEMY_CAP_BASE: u32 = 7;

/// Additional live enemies allowed per stage beyond the first.
pub const ENEMY_CAP_PER_STAGE: u32 = 3;

pub const ENEMY_JUMP_COOLDOWN_MS: u64 = 1000;

/// Distance an enemy steps back before jumping over an obstacle.
pub const ENEMY_STEP_BACK: f32 = 50.0;

pub const ENEMY_JUMP_IMPULSE: f32 = -400.0;

// --- Contact damage ---

pub const CONTACT_DAMAGE: u32 = 2;

pub const HIT_COOLDOWN_MS: u64 = 500;

pub const KNOCKBACK_DURATION_MS: u64 = 300;

pub const KNOCKBACK_SPEED_X: f32 = 200.0;

/// Small upward bump applied with knockback.
pub const KNOCKBACK_SPEED_Y: f32 = -50.0;

// --- Stage progression ---

pub const KILL_TARGET_CLASSIC: u32 = 15;
pub const KILL_TARGET_STEP_CLASSIC: u32 = 5;
pub const KILL_TARGET_ARENA: u32 = 7;
pub const KILL_TARGET_STEP_ARENA: u32 = 3;

// --- Shop ---

pub const SHOP_PRICE: u32 = 10;

pub const SHOP_HEAL_AMOUNT: u32 = 10;

pub const SHOP_SPEED_STEP: u32 = 1;

pub const SHOP_DAMAGE_STEP: u32 = 5;

// --- Overlays ---

/// Asset key of the themed overlay backdrop.
pub const MENU_IMAGE_KEY: &str = "menu";

/// Footprint of the overlay backdrop.
pub const OVERLAY_SIZE: [f32; 2] = [384.0, 448.0];

/// Fallback backdrop fill (RGB) and alpha.
pub const OVERLAY_FALLBACK_COLOR: u32 = 0x000000;
pub const OVERLAY_FALLBACK_ALPHA: f32 = 0.8;
