use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuroraBackgroundProps {
    #[prop_or(true)]
    pub show_radial_gradient: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height section with a slowly drifting aurora behind its children.
#[function_component(AuroraBackground)]
pub fn aurora_background(props: &AuroraBackgroundProps) -> Html {
    let aurora_class = classes!(
        "aurora",
        props.show_radial_gradient.then(|| "aurora-radial")
    );

    html! {
        <main class="aurora-page">
            <style>
                {r#"
                    .aurora-page {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        overflow: hidden;
                        background: #fafafa;
                        color: #020617;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .aurora-layer {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .aurora {
                        --white-gradient: repeating-linear-gradient(100deg, #fff 0%, #fff 7%, transparent 10%, transparent 12%, #fff 16%);
                        --aurora: repeating-linear-gradient(100deg, #3b82f6 10%, #a5b4fc 15%, #93c5fd 20%, #ddd6fe 25%, #60a5fa 30%);
                        position: absolute;
                        inset: -10px;
                        opacity: 0.5;
                        filter: blur(10px) invert(1);
                        background-image: var(--white-gradient), var(--aurora);
                        background-size: 300%, 200%;
                        background-position: 50% 50%, 50% 50%;
                        will-change: transform;
                    }
                    .aurora::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background-image: var(--white-gradient), var(--aurora);
                        background-size: 200%, 100%;
                        background-attachment: fixed;
                        mix-blend-mode: difference;
                        animation: aurora 60s linear infinite;
                    }
                    .aurora-radial {
                        mask-image: radial-gradient(ellipse at 100% 0%, black 10%, transparent 70%);
                        -webkit-mask-image: radial-gradient(ellipse at 100% 0%, black 10%, transparent 70%);
                    }
                    @keyframes aurora {
                        from { background-position: 50% 50%, 50% 50%; }
                        to { background-position: 350% 50%, 350% 50%; }
                    }
                    @media (prefers-color-scheme: dark) {
                        .aurora-page {
                            background: #18181b;
                            color: #ffffff;
                        }
                        .aurora {
                            --white-gradient: repeating-linear-gradient(100deg, #000 0%, #000 7%, transparent 10%, transparent 12%, #000 16%);
                            filter: blur(10px);
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .aurora::after {
                            animation: none;
                        }
                    }
                "#}
            </style>
            <div class="aurora-layer">
                <div class={aurora_class}></div>
            </div>
            { for props.children.iter() }
        </main>
    }
}
