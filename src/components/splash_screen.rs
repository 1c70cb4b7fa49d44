use yew::prelude::*;

const COLLAGE: &[(&str, &str, &str)] = &[
    ("/assets/shopping-cart.jpg", "Shopping cart", "top: 5rem; left: 4rem;"),
    ("/assets/mobile-shopping.jpg", "Mobile shopping", "top: 8rem; right: 5rem;"),
    ("/assets/packages.jpg", "Packages", "bottom: 10rem; left: 5rem;"),
    ("/assets/shopping-bags.jpg", "Shopping bags", "bottom: 5rem; right: 4rem;"),
    ("/assets/price-tags.jpg", "Price tags", "top: 16rem; left: 50%; transform: translateX(-50%);"),
    ("/assets/price-comparison.jpg", "Price comparison", "bottom: 15rem; right: 10rem;"),
];

#[derive(Properties, PartialEq)]
pub struct SplashScreenProps {
    pub is_exiting: bool,
}

#[function_component(SplashScreen)]
pub fn splash_screen(props: &SplashScreenProps) -> Html {
    html! {
        <div class={classes!("splash", props.is_exiting.then(|| "splash-exit"))}>
            <style>
                {r#"
                    .splash {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #1a1625 0%, #2d2440 100%);
                        transition: transform 1s ease-in-out;
                        overflow: hidden;
                    }
                    .splash-exit {
                        transform: translateY(-100%);
                    }
                    .splash-collage-item {
                        position: absolute;
                        width: 12rem;
                        height: 8rem;
                        opacity: 0.2;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        animation: fadeInUp 1s ease-out both;
                    }
                    .splash-collage-item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: blur(2px) grayscale(100%);
                    }
                    .splash-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 2rem;
                        max-width: 56rem;
                    }
                    .splash-title {
                        font-family: Georgia, "Times New Roman", serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        color: #f5f3ff;
                        line-height: 1.15;
                        margin-bottom: 2rem;
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .splash-title .accent, .splash-rule {
                        background: linear-gradient(90deg, #c084fc, #f472b6);
                    }
                    .splash-title .accent {
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .splash-rule {
                        width: 4rem;
                        height: 0.25rem;
                        margin: 0 auto;
                        border-radius: 9999px;
                        animation: fadeInUp 0.8s ease-out 0.5s both;
                    }
                    .splash-tagline {
                        color: #a39fb8;
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-weight: 300;
                        margin-top: 2rem;
                        animation: fadeInUp 0.8s ease-out 0.7s both;
                    }
                    .splash-dots {
                        position: absolute;
                        bottom: 4rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.5rem;
                    }
                    .splash-dots span {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: #c084fc;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.3; }
                    }
                "#}
            </style>
            <div class="splash-collage" aria-hidden="true">
                { for COLLAGE.iter().enumerate().map(|(i, (src, alt, position))| html! {
                    <div
                        class="splash-collage-item"
                        style={format!("{} animation-delay: {:.1}s;", position, i as f32 * 0.2)}
                    >
                        <img src={*src} alt={*alt} />
                    </div>
                }) }
            </div>
            <div class="splash-content">
                <h1 class="splash-title">
                    {"Still shopping like it's "}
                    <span class="accent">{"2015?"}</span>
                </h1>
                <div class="splash-rule"></div>
                <p class="splash-tagline">{"It's time to shop smarter, not harder"}</p>
            </div>
            <div class="splash-dots">
                { for (0..3).map(|i| html! {
                    <span style={format!("animation-delay: {:.1}s;", i as f32 * 0.2)}></span>
                }) }
            </div>
        </div>
    }
}
