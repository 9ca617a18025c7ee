//! Compile-time configuration for the relay client, the particle backdrop
//! and the colour theme.

use std::time::Duration;

/// EmailJS REST endpoint used by the browser SDK.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials and transport settings for the email relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key (sent as `user_id`)
    pub public_key: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: "service_tktl2ob".to_string(),
            template_id: "template_7o85vd9".to_string(),
            public_key: "BfOarPzL3ITYZaqmO".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Tunables for the background particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    /// Number of particles, fixed for the lifetime of a field
    pub count: usize,
    /// Per-axis velocity bound in pixels per frame
    pub max_speed: f32,
    pub radius: f32,
    /// Pairs closer than this are joined by a line
    pub link_distance: f32,
    /// Line alpha at zero distance
    pub max_link_alpha: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.25,
            radius: 2.0,
            link_distance: 150.0,
            max_link_alpha: 0.2,
        }
    }
}

/// Green-on-black terminal palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: egui::Color32,
    pub accent: egui::Color32,
    pub accent_dim: egui::Color32,
    pub text: egui::Color32,
    pub muted: egui::Color32,
    pub success: egui::Color32,
    pub failure: egui::Color32,
    /// Particle and link colour (alpha applied per draw)
    pub particle: [u8; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(0, 0, 0),
            accent: egui::Color32::from_rgb(0, 255, 65),
            accent_dim: egui::Color32::from_rgb(0, 143, 17),
            text: egui::Color32::from_rgb(0, 221, 53),
            muted: egui::Color32::from_rgb(0, 204, 51),
            success: egui::Color32::from_rgb(56, 189, 248),
            failure: egui::Color32::from_rgb(239, 68, 68),
            particle: [0, 255, 65],
        }
    }
}
