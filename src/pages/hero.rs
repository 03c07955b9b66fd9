use log::error;
use serde::Deserialize;
use yew::prelude::*;

use crate::components::{
    aurora_background::AuroraBackground, entrance::Entrance, reveal::Reveal,
};
use crate::config;
use crate::error::HeroError;

/// A link styled as a button under the subheadline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroConfig {
    pub headline: String,
    pub subheadline: String,
    #[serde(default)]
    pub cta: Option<Cta>,
}

impl HeroConfig {
    pub fn new(headline: impl Into<String>, subheadline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            subheadline: subheadline.into(),
            cta: None,
        }
    }

    pub fn with_cta(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.cta = Some(Cta {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    pub fn demo() -> Self {
        Self::new(config::HEADLINE, config::DEMO_SUBHEADLINE)
    }

    pub fn landing() -> Self {
        Self::new(config::HEADLINE, config::APP_SUBHEADLINE)
            .with_cta(config::CTA_LABEL, config::APP_URL)
    }

    pub fn validate(&self) -> Result<(), HeroError> {
        non_empty("headline", &self.headline)?;
        non_empty("subheadline", &self.subheadline)?;
        if let Some(cta) = &self.cta {
            non_empty("call-to-action label", &cta.label)?;
            non_empty("call-to-action href", &cta.href)?;
            let href = cta.href.trim();
            let absolute = ["https://", "http://"]
                .iter()
                .any(|scheme| href.len() > scheme.len() && href.starts_with(scheme));
            if !absolute {
                return Err(HeroError::InvalidHref {
                    href: cta.href.clone(),
                });
            }
        }
        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), HeroError> {
    if value.trim().is_empty() {
        return Err(HeroError::EmptyField { field });
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: HeroConfig,
    #[prop_or_default]
    pub entrance: Entrance,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    if let Err(err) = props.config.validate() {
        error!("Not rendering hero: {}", err);
        return html! {};
    }
    let HeroConfig {
        headline,
        subheadline,
        cta,
    } = &props.config;

    html! {
        <AuroraBackground>
            <style>
                {r#"
                    .hero-content {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                    }
                    .hero-headline {
                        font-size: 1.875rem;
                        font-weight: 700;
                        text-align: center;
                    }
                    .hero-subheadline {
                        font-size: 1rem;
                        font-weight: 200;
                        padding: 1rem 0;
                    }
                    .hero-cta {
                        width: fit-content;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: #000000;
                        color: #ffffff;
                        text-decoration: none;
                    }
                    @media (min-width: 768px) {
                        .hero-headline {
                            font-size: 4.5rem;
                        }
                        .hero-subheadline {
                            font-size: 2.25rem;
                        }
                    }
                    @media (prefers-color-scheme: dark) {
                        .hero-headline {
                            color: #ffffff;
                        }
                        .hero-subheadline {
                            color: #e5e5e5;
                        }
                        .hero-cta {
                            background: #ffffff;
                            color: #000000;
                        }
                    }
                "#}
            </style>
            <Reveal entrance={props.entrance} class="hero-content">
                <div class="hero-headline">{ headline.clone() }</div>
                <div class="hero-subheadline">{ subheadline.clone() }</div>
                {
                    if let Some(cta) = cta {
                        html! {
                            <a href={cta.href.clone()} class="hero-cta">
                                { cta.label.clone() }
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </Reveal>
        </AuroraBackground>
    }
}

/// Headline and subheadline only, used for the demo page.
#[function_component(HeroDemo)]
pub fn hero_demo() -> Html {
    html! { <Hero config={HeroConfig::demo()} /> }
}

#[function_component(HeroWithCta)]
pub fn hero_with_cta() -> Html {
    html! { <Hero config={HeroConfig::landing()} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default + Send,
    {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    #[test]
    fn presets_carry_the_literal_text() {
        let demo = HeroConfig::demo();
        assert_eq!(demo.headline, "Here for your child's health");
        assert_eq!(demo.subheadline, "Kito App Demo");
        assert_eq!(demo.cta, None);

        let landing = HeroConfig::landing();
        assert_eq!(landing.headline, "Here for your child's health");
        assert_eq!(landing.subheadline, "Kito App Demo v1.0.3");
        assert_eq!(
            landing.cta,
            Some(Cta {
                label: "Access Kito App".to_string(),
                href: "https://app.kitohealth.org".to_string(),
            })
        );
        assert_eq!(landing.validate(), Ok(()));
        assert_eq!(demo.validate(), Ok(()));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            HeroConfig::new("  ", "sub").validate(),
            Err(HeroError::EmptyField { field: "headline" })
        );
        assert_eq!(
            HeroConfig::new("head", "").validate(),
            Err(HeroError::EmptyField {
                field: "subheadline"
            })
        );
        assert_eq!(
            HeroConfig::new("head", "sub")
                .with_cta("", "https://example.org")
                .validate(),
            Err(HeroError::EmptyField {
                field: "call-to-action label"
            })
        );
    }

    #[test]
    fn cta_must_point_somewhere_absolute() {
        let relative = HeroConfig::new("head", "sub").with_cta("Go", "/app");
        assert_eq!(
            relative.validate(),
            Err(HeroError::InvalidHref {
                href: "/app".to_string()
            })
        );

        let bare_scheme = HeroConfig::new("head", "sub").with_cta("Go", "https://");
        assert!(bare_scheme.validate().is_err());

        let plain_http = HeroConfig::new("head", "sub").with_cta("Go", "http://localhost:8080");
        assert_eq!(plain_http.validate(), Ok(()));
    }

    #[test]
    fn config_reads_from_json_without_cta() {
        let config: HeroConfig = serde_json::from_str(
            r#"{ "headline": "Here for your child's health", "subheadline": "Kito App Demo" }"#,
        )
        .unwrap();
        assert_eq!(config, HeroConfig::demo());
    }

    #[tokio::test]
    async fn demo_renders_text_without_link() {
        let html = render::<HeroDemo>().await;

        assert_eq!(html.matches(r#"class="hero-headline""#).count(), 1);
        assert_eq!(html.matches(">Here for your child's health</div>").count(), 1);
        assert!(html.contains(">Kito App Demo</div>"));
        assert!(!html.contains("v1.0.3"));
        assert!(!html.contains("<a "));
    }

    #[tokio::test]
    async fn cta_variant_renders_one_link() {
        let html = render::<HeroWithCta>().await;

        assert_eq!(html.matches(r#"class="hero-headline""#).count(), 1);
        assert_eq!(html.matches(r#"class="hero-subheadline""#).count(), 1);
        assert_eq!(html.matches(">Here for your child's health</div>").count(), 1);
        assert!(html.contains(">Kito App Demo v1.0.3</div>"));
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(r#"href="https://app.kitohealth.org""#));
        assert!(html.contains("Access Kito App</a>"));
    }

    #[tokio::test]
    async fn content_starts_in_pre_visible_state() {
        for html in [render::<HeroDemo>().await, render::<HeroWithCta>().await] {
            assert!(html.contains(r#"style="opacity: 0; transform: translateY(40px);""#));
        }
    }

    #[function_component(BrokenHero)]
    fn broken_hero() -> Html {
        html! { <Hero config={HeroConfig::new("Here for your child's health", "")} /> }
    }

    #[tokio::test]
    async fn invalid_config_renders_nothing() {
        let html = render::<BrokenHero>().await;

        assert!(!html.contains("Here for your child"));
        assert!(!html.contains("aurora-page"));
    }
}
