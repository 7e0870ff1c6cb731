use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::fade_in::FadeInSection;
use crate::components::image_fallback::ImageWithFallback;

const HERO_VIDEO_URL: &str = "https://www.youtube.com/embed/-8hwjQ19d7c?autoplay=1&mute=1&loop=1&playlist=-8hwjQ19d7c&controls=0&showinfo=0&rel=0&modestbranding=1&playsinline=1";

const BOOKING_ABOUT_URL: &str = "https://liv.reserve-online.net/about";

// (title, card image, reservation page)
const HOTELS: &[(&str, &str, &str)] = &[
    (
        "Liv Urban",
        "/assets/Liv_Urban_Hotel.jpg",
        "https://liv.reserve-online.net/property/LIVCOLLECT",
    ),
    (
        "Liv Mackenzie",
        "/assets/Liv_Mackenzie_Hotel.jpg",
        "https://liv.reserve-online.net/property/LIVMACKENZ",
    ),
    (
        "Liv Suites&Villas",
        "/assets/Liv_Suites_Villas_Hotel.jpg",
        "https://liv.reserve-online.net/property/LIVCOLTD",
    ),
    (
        "Liv The City Suites",
        "/assets/liv-the-city-suites-hotel2.jpg",
        "https://liv.reserve-online.net/property/LIVTHECITY",
    ),
];

const GALLERY_IMAGES: &[&str] = &[
    "/assets/yogaandfun.jpg",
    "/assets/2F5A7979-2.jpg",
    "/assets/2F5A9556.jpg",
    "/assets/liveurban_photos_0073.jpg",
    "/assets/Carusel5.jpg",
    "/assets/Carusel7.jpg",
    "/assets/Carusel8.jpg",
];

const TOUR_CHURCH_IMAGE: &str = "https://images.unsplash.com/photo-1645187160613-0e8c496cb4a1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxsYXJuYWNhJTIwY3lwcnVzJTIwY2h1cmNofGVufDF8fHx8MTc2Mjc4MTc1M3ww&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral";

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let text_visible = use_state(|| false);

    // The logo slides in half a second after the video region mounts.
    {
        let text_visible = text_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(500, move || text_visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let logo_style = if *text_visible {
        "opacity: 1; transform: translateY(0); transition: opacity 1.2s ease-out, transform 1.2s ease-out;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 1.2s ease-out, transform 1.2s ease-out;"
    };

    html! {
        <div class="hero">
            <div class="hero-video">
                <iframe
                    src={HERO_VIDEO_URL}
                    title="Liv Collection Hero Video"
                    allow="autoplay; encrypted-media"
                    style="pointer-events: none;"
                />
                <div class="hero-scrim"></div>
            </div>
            <div class="hero-overlay">
                <div class="hero-logo" style={logo_style}>
                    <img src="/assets/liv-logo.png" alt="Liv Collection Logo" />
                </div>
            </div>
        </div>
    }
}

#[function_component(IntroSection)]
fn intro_section() -> Html {
    html! {
        <section class="intro">
            <div class="intro-inner">
                <FadeInSection>
                    <h2>{ "ברוכים הבאים הביתה" }</h2>
                </FadeInSection>
                <FadeInSection delay={0.2}>
                    <div class="intro-copy" dir="rtl">
                        <p>
                            { "הגעתם לבית החדש שלכם בעולם האירוח – המקום שבו הנופש מתחבר אל הנכס שלכם. \
                               כבעלי הדירות של Liv Collection, אתם מוזמנים להצטרף לקהילה של אנשים שאוהבים \
                               לחיות טוב, לנוח ולחוות רגעים שנשארים אתכם הרבה אחרי שחוזרים הביתה." }
                        </p>
                        <p>
                            { "כאן תוכלו להזמין חופשות במתחמי הרשת – עם הנחה קבועה ובלעדית בכל הזמנה, \
                               בכל מלון, בכל זמן." }
                        </p>
                        <p>
                            { "כל חופשה שלכם יכולה להפוך לחוויה מלאה – תוכלו להוסיף להזמנה ארוחת בוקר \
                               עשירה, להזמין העברות נוחות משדה התעופה ואליו, או לשדרג את השהות עם אחת \
                               החוויות הייחודיות שלנו." }
                        </p>
                        <p>
                            { "אחת מהחוויות המשמעותיות היא סיור חווייתי לבעלי הדירות של Liv Collection – \
                               סיור שמזמין אתכם להכיר מקרוב את קפריסין דרך עיניים מקומיות. הסיור יספק \
                               היכרות עם האי, עם הצוות, ועם הערכים שמאחורי המותג." }
                        </p>
                    </div>
                </FadeInSection>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HotelCardProps {
    title: AttrValue,
    image: AttrValue,
    link: AttrValue,
    delay: f32,
}

#[function_component(HotelCard)]
fn hotel_card(props: &HotelCardProps) -> Html {
    html! {
        <FadeInSection delay={props.delay}>
            <a
                class="hotel-card"
                href={props.link.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                <ImageWithFallback src={props.image.clone()} alt={props.title.clone()} />
                <div class="hotel-card-scrim"></div>
                <div class="hotel-card-body" dir="rtl">
                    <h3>{ props.title.clone() }</h3>
                    <span class="hotel-card-cta">
                        <span>{ "להזמנה לחץ כאן" }</span>
                        <svg
                            class="hotel-card-arrow"
                            viewBox="0 0 24 24"
                            width="16"
                            height="16"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M5 12h14" />
                            <path d="M12 5l7 7-7 7" />
                        </svg>
                    </span>
                </div>
            </a>
        </FadeInSection>
    }
}

#[function_component(HotelHighlights)]
fn hotel_highlights() -> Html {
    html! {
        <section class="hotels">
            <div class="hotels-grid">
                { for HOTELS.iter().enumerate().map(|(index, (title, image, link))| html! {
                    <HotelCard
                        key={*title}
                        title={*title}
                        image={*image}
                        link={*link}
                        delay={index as f32 * 0.1}
                    />
                })}
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <section class="experience">
            <div class="experience-inner">
                <FadeInSection>
                    <h2>{ "סיור הכרות – בואו לגלות את לרנקה" }</h2>
                </FadeInSection>
                <div class="experience-grid">
                    <FadeInSection delay={0.2}>
                        <div class="experience-photos">
                            <div>
                                <ImageWithFallback
                                    src={TOUR_CHURCH_IMAGE}
                                    alt="Larnaca Church"
                                />
                            </div>
                            <div>
                                <ImageWithFallback
                                    src="/assets/food.jpg"
                                    alt="Cyprus Coastal City"
                                />
                            </div>
                        </div>
                    </FadeInSection>
                    <FadeInSection delay={0.3}>
                        <div class="experience-copy" dir="rtl">
                            <p>
                                { "כחברי קהילת Liv Collection, אתם מוזמינו לסיור חווייתי בלרנקה – \
                                   חוויה בת 3-4 שעות בימי שישי (10:00–14:00)." }
                            </p>
                            <p>{ "מהלך הסיור תיהנו מ:" }</p>
                            <ul class="experience-list" dir="rtl">
                                <li>
                                    <span class="experience-marker">{ "◆" }</span>
                                    { "ביקור בפינות הקסומות של לרנקה וטעימה מחיי המקום." }
                                </li>
                                <li>
                                    <span class="experience-marker">{ "◆" }</span>
                                    { "היכרות עם הנכסים ומתחמי האירוח של הרשת, כולל פרויקט The Valley החדש. \
                                       סוף סוף תוכלו לראות את הנוף מהמרפסת בדירה שלכם." }
                                </li>
                                <li>
                                    <span class="experience-marker">{ "◆" }</span>
                                    { "טעימות אוכל ושתייה באווירה חמה ואותנטית." }
                                </li>
                                <li>
                                    <span class="experience-marker">{ "◆" }</span>
                                    { "ליווי מקצועי מבית Liv Collection." }
                                </li>
                            </ul>
                            <div class="experience-price">
                                <p>
                                    <span class="label">{ "מחיר:" }</span>
                                    { " €80 לאדם / €160 לזוג" }
                                </p>
                                <p class="note">{ "ניתן להוסיף את הסיור בעת ההזמנה." }</p>
                            </div>
                            <a
                                class="experience-cta"
                                href={BOOKING_ABOUT_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                { "להזמנת מלון" }
                            </a>
                        </div>
                    </FadeInSection>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let images: Vec<AttrValue> = GALLERY_IMAGES
        .iter()
        .map(|path| AttrValue::from(*path))
        .collect();

    html! {
        <section class="about">
            <div class="about-grid">
                <FadeInSection>
                    <div class="about-copy" dir="rtl">
                        <h2>{ "אודות Liv Collection" }</h2>
                        <p>
                            { "Liv Collection הוקמה מתוך חזון ליצור חוויה אחרת של נופש– כזו שמרגישה \
                               כמו בית. השם LIV לא נבחר במקרה: הוא מגלם את האמונה שלנו שכל רגע הוא \
                               הזדמנות לחיות, לנשום, להרגיש." }
                        </p>
                        <p>
                            { "בכל שהות אנחנו מבקשים לייצר עבורכם רגעים של נחת, כוס קפה מול הים, \
                               חיוך מהצוות, או חדר שמעוצב ומאובזר בדיוק בשבילכם." }
                        </p>
                        <p>
                            { "ב-Liv Collection אתם לא רק אורחים אתם חלק ממשפחה של בעלי דירות ואורחים \
                               שחיים את הערכים שלנו." }
                        </p>
                        <p>
                            { "אנו מזמינים אתכם, לגלות ולחוות את האיים הקסומים שלנו דרך קהילה אחת \
                               חמה שמחברת בין כולם." }
                        </p>
                    </div>
                </FadeInSection>
                <FadeInSection delay={0.2}>
                    <Carousel images={images} />
                </FadeInSection>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="footer-wordmark">{ "LIV COLLECTION" }</div>
                    <p>{ "Owners Club" }</p>
                </div>
                <nav class="footer-nav">
                    <a href="#">{ "Home" }</a>
                    <a href="https://www.livcollections.com">{ "LivCollection.com" }</a>
                </nav>
            </div>
            <div class="footer-legal">
                <p>{ format!("Copyright © {year} Liv Collection. All rights reserved.") }</p>
            </div>
        </footer>
    }
}

// Sections render in this fixed order; the page has no routes and no
// conditional composition.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    .page {
                        min-height: 100vh;
                        font-family: 'Montserrat', sans-serif;
                        color: #3E617F;
                    }
                    .page h2 {
                        font-size: 2.25rem;
                        font-weight: 300;
                        margin: 0 0 2rem;
                    }
                    @media (min-width: 768px) {
                        .page h2 {
                            font-size: 3rem;
                        }
                    }

                    .hero {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        background: #000;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-video iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                    }
                    .hero-scrim {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.3);
                    }
                    .hero-overlay {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                    }
                    .hero-logo {
                        position: absolute;
                        top: 1.5rem;
                        left: 1rem;
                    }
                    @media (min-width: 768px) {
                        .hero-logo {
                            top: 3rem;
                            left: 4rem;
                        }
                    }
                    .hero-logo img {
                        height: 3rem;
                        width: auto;
                    }
                    @media (min-width: 768px) {
                        .hero-logo img {
                            height: 5rem;
                        }
                    }

                    .intro {
                        padding: 6rem 1rem;
                        background: #F9F6F0;
                    }
                    .intro-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .intro-copy p {
                        line-height: 1.8;
                        margin: 0 0 1.5rem;
                    }

                    .hotels {
                        padding: 4rem 1rem;
                        background: #fff;
                    }
                    .hotels-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    @media (min-width: 1024px) {
                        .hotels-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                    .hotel-card {
                        position: relative;
                        display: block;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        aspect-ratio: 4 / 5;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .hotel-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .hotel-card:hover img {
                        transform: scale(1.1);
                    }
                    .hotel-card-scrim {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to top,
                            rgba(0, 0, 0, 0.7),
                            rgba(0, 0, 0, 0.2) 50%,
                            transparent
                        );
                    }
                    .hotel-card-body {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        color: #fff;
                    }
                    .hotel-card-body h3 {
                        font-size: 1.5rem;
                        font-weight: 300;
                        margin: 0 0 1rem;
                    }
                    .hotel-card-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #D46737;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        transition: background 0.3s ease;
                    }
                    .hotel-card:hover .hotel-card-cta {
                        background: #B85530;
                    }
                    .hotel-card-arrow {
                        transition: transform 0.3s ease;
                    }
                    .hotel-card:hover .hotel-card-arrow {
                        transform: translateX(-4px);
                    }

                    .experience {
                        padding: 4rem 1rem;
                        background: #fff;
                    }
                    .experience-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .experience h2 {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .experience-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .experience-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .experience-photos {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .experience-photos > div {
                        aspect-ratio: 4 / 3;
                        border-radius: 0.5rem;
                        overflow: hidden;
                    }
                    .experience-photos img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .experience-copy p {
                        line-height: 1.8;
                        margin: 0 0 1.5rem;
                    }
                    .experience-list {
                        list-style: none;
                        margin: 0 0 1.5rem;
                        padding: 0 1.5rem 0 0;
                        text-align: right;
                    }
                    .experience-list li {
                        line-height: 2;
                        margin-bottom: 0.75rem;
                    }
                    .experience-marker {
                        color: #D46737;
                        margin-left: 0.75rem;
                        display: inline-block;
                    }
                    .experience-price {
                        background: #F9F6F0;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .experience-price p {
                        margin: 0;
                    }
                    .experience-price .label {
                        color: #D46737;
                    }
                    .experience-price .note {
                        font-size: 0.875rem;
                        opacity: 0.8;
                        margin-top: 1rem;
                    }
                    .experience-cta {
                        display: inline-block;
                        background: #D46737;
                        color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 0.375rem;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .experience-cta:hover {
                        background: #B85530;
                    }

                    .about {
                        padding: 6rem 1rem;
                        background: #F9F6F0;
                    }
                    .about-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .about-copy p {
                        line-height: 1.8;
                        margin: 0 0 1.5rem;
                    }

                    .footer {
                        background: #3E617F;
                        color: #fff;
                        padding: 3rem 1rem;
                    }
                    .footer-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    @media (min-width: 768px) {
                        .footer-inner {
                            flex-direction: row;
                            justify-content: space-between;
                        }
                    }
                    .footer-wordmark {
                        font-family: 'Love', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 300;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.5rem;
                    }
                    .footer-brand {
                        text-align: center;
                    }
                    @media (min-width: 768px) {
                        .footer-brand {
                            text-align: left;
                        }
                    }
                    .footer-brand p {
                        font-size: 0.875rem;
                        opacity: 0.8;
                        margin: 0;
                    }
                    .footer-nav {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        font-size: 0.875rem;
                    }
                    .footer-nav a {
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-nav a:hover {
                        color: #D46737;
                    }
                    .footer-legal {
                        max-width: 72rem;
                        margin: 2rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        text-align: center;
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }
                    .footer-legal p {
                        margin: 0;
                    }

                    .image-fallback {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #eee;
                    }
                "#}
            </style>
            <HeroSection />
            <IntroSection />
            <HotelHighlights />
            <ExperienceSection />
            <AboutSection />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_ships_seven_images() {
        assert_eq!(GALLERY_IMAGES.len(), 7);
    }

    #[test]
    fn every_property_links_to_the_reservation_system() {
        for (_, _, link) in HOTELS {
            assert!(link.starts_with("https://liv.reserve-online.net/"));
        }
    }
}
