use super::{emit, render_page};
use crate::config::DomkitConfig;
use anyhow::Result;
use clap::Subcommand;
use domkit_exercises::{bg_changer, custom_render, password_generator};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Demo {
    /// Render the hand-written link description into #root.
    CustomRender,

    /// Click through the background changer and print the resulting page.
    BgChanger {
        /// Button ids to click, in order
        #[clap(long = "click")]
        clicks: Vec<String>,
    },

    /// Generate a password and print the generator page.
    Password {
        /// Password length, clamped to 8..=24
        #[clap(long)]
        length: Option<usize>,

        /// Allow digits
        #[clap(long)]
        numbers: bool,

        /// Allow special characters
        #[clap(long)]
        chars: bool,

        /// Seed the generator for reproducible output
        #[clap(long)]
        seed: Option<u64>,
    },
}

impl Demo {
    pub(crate) fn run(self, config: &DomkitConfig) -> Result<()> {
        let html = self.html(config)?;
        emit(&html, None)
    }

    fn html(self, config: &DomkitConfig) -> Result<String> {
        match self {
            Demo::CustomRender => render_page(custom_render::link(), config),

            Demo::BgChanger { clicks } => {
                let state = clicks
                    .into_iter()
                    .fold(bg_changer::BgChanger::default(), |state, id| {
                        bg_changer::update(state, bg_changer::Event::ButtonClicked { id })
                    });
                tracing::info!(background = state.background, "background changer settled");
                render_page(bg_changer::view(&state), config)
            }

            Demo::Password {
                length,
                numbers,
                chars,
                seed,
            } => {
                let options = password_generator::Options::new(
                    length.unwrap_or(config.password.length),
                    numbers || config.password.numbers,
                    chars || config.password.chars,
                );
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                let state = password_generator::PasswordGenerator::new(options, &mut rng);
                tracing::info!(length = state.options.length, "generated password");
                render_page(password_generator::view(&state), config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_render_page() {
        let html = Demo::CustomRender.html(&DomkitConfig::default()).unwrap();
        assert_eq!(
            html,
            "<a href=\"https://google.com\" target=\"_blank\">Click me to visit Google</a>"
        );
    }

    #[test]
    fn clicks_apply_in_order() {
        let demo = Demo::BgChanger {
            clicks: vec!["red".into(), "nope".into(), "yellow".into()],
        };
        let html = demo.html(&DomkitConfig::default()).unwrap();
        assert!(html.starts_with("<div class=\"bg-yellow-500\">"));
    }

    #[test]
    fn seeded_passwords_are_reproducible() {
        let demo = || Demo::Password {
            length: Some(12),
            numbers: true,
            chars: false,
            seed: Some(99),
        };
        let config = DomkitConfig::default();
        assert_eq!(demo().html(&config).unwrap(), demo().html(&config).unwrap());
        assert!(demo().html(&config).unwrap().contains("Length: (12)"));
    }

    #[test]
    fn config_supplies_password_defaults() {
        let mut config = DomkitConfig::default();
        config.password.length = 20;
        config.password.chars = true;

        let html = Demo::Password {
            length: None,
            numbers: false,
            chars: false,
            seed: Some(1),
        }
        .html(&config)
        .unwrap();

        assert!(html.contains("Length: (20)"));
        assert!(html.contains("<input checked=\"\" id=\"characterInput\" type=\"checkbox\"/>"));
    }
}
