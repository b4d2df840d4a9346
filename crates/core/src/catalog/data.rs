//! Catalog content.
//!
//! Image paths point into the site's `/static` tree. Photos that are not
//! checked in resolve to the matching `*_FALLBACK_IMAGE` at render time.

use chrono::NaiveDate;

use super::profile::{Address, OpeningHours, SeoDefaults, SiteProfile, SocialLink, Stat};
use super::service::{Service, ServiceCategory};
use super::slide::{CallToAction, HeroSlide};
use super::testimonial::Testimonial;
use crate::types::Rating;

pub const SERVICE_FALLBACK_IMAGE: &str = "/static/images/fallback/service.svg";
pub const HERO_FALLBACK_IMAGE: &str = "/static/images/fallback/hero.svg";
pub const AVATAR_FALLBACK_IMAGE: &str = "/static/images/fallback/avatar.svg";

/// Compile-time checked rating.
const fn stars(n: u8) -> Rating {
    match Rating::new(n) {
        Ok(rating) => rating,
        Err(_) => panic!("testimonial rating out of range"),
    }
}

/// Compile-time checked date.
const fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => Some(d),
        None => panic!("invalid testimonial date"),
    }
}

static SERVICES: &[Service] = &[
    Service {
        id: "engine-repair",
        category: ServiceCategory::Engine,
        icon: "engine",
        title: "Engine Repair & Rebuild",
        description: "From misfires and oil leaks to full rebuilds, our ASE-certified technicians restore power and reliability to gasoline and diesel engines.",
        duration: "1-3 days",
        price: "From $299",
        features: &[
            "Compression and leak-down testing",
            "Head gasket and valve work",
            "OEM or equivalent parts",
            "24-month / 24,000-mile warranty",
        ],
        popular: true,
        image: "/static/images/services/engine-repair.jpg",
    },
    Service {
        id: "timing-belt",
        category: ServiceCategory::Engine,
        icon: "engine",
        title: "Timing Belt & Chain",
        description: "Preventive timing belt and chain replacement on schedule, with water pump and tensioners inspected in the same visit.",
        duration: "3-6 hours",
        price: "From $449",
        features: &[
            "Belt, tensioner and idler replacement",
            "Water pump inspection",
            "Cam and crank seal check",
        ],
        popular: false,
        image: "/static/images/services/timing-belt.jpg",
    },
    Service {
        id: "check-engine-diagnostics",
        category: ServiceCategory::Diagnostics,
        icon: "scan",
        title: "Check Engine Diagnostics",
        description: "Dealer-level scan tools and a technician who reads past the code, so you pay to fix the cause instead of guessing at parts.",
        duration: "45-90 minutes",
        price: "$89",
        features: &[
            "Full OBD-II system scan",
            "Freeze-frame and live data review",
            "Written repair estimate",
            "Fee credited toward the repair",
        ],
        popular: true,
        image: "/static/images/services/diagnostics.jpg",
    },
    Service {
        id: "brake-service",
        category: ServiceCategory::Brakes,
        icon: "brake",
        title: "Brake Service",
        description: "Pads, rotors, calipers and fluid. We measure everything, show you the wear, and only replace what needs replacing.",
        duration: "1-2 hours",
        price: "From $149",
        features: &[
            "Pad and rotor replacement",
            "Caliper and hose inspection",
            "Brake fluid flush",
            "Road test after every job",
        ],
        popular: true,
        image: "/static/images/services/brakes.jpg",
    },
    Service {
        id: "abs-repair",
        category: ServiceCategory::Brakes,
        icon: "brake",
        title: "ABS & Stability Control",
        description: "Wheel speed sensors, ABS modules and hydraulic units diagnosed and repaired so your warning lights stay off.",
        duration: "2-4 hours",
        price: "From $199",
        features: &["Sensor and tone ring testing", "Module diagnostics", "System bleed"],
        popular: false,
        image: "/static/images/services/abs.jpg",
    },
    Service {
        id: "oil-change",
        category: ServiceCategory::Maintenance,
        icon: "oil",
        title: "Oil Change & Inspection",
        description: "Synthetic or conventional oil, a new filter, and a 27-point inspection so small problems are caught early.",
        duration: "30-45 minutes",
        price: "From $49",
        features: &[
            "Up to 5 quarts of oil",
            "OEM-spec filter",
            "Fluid top-off",
            "27-point inspection report",
        ],
        popular: true,
        image: "/static/images/services/oil-change.jpg",
    },
    Service {
        id: "scheduled-maintenance",
        category: ServiceCategory::Maintenance,
        icon: "wrench",
        title: "Scheduled Maintenance",
        description: "30k, 60k and 90k-mile services performed to the manufacturer schedule, keeping your warranty intact.",
        duration: "2-4 hours",
        price: "From $189",
        features: &[
            "Manufacturer service schedule",
            "Filters, plugs and fluids",
            "Stamped service record",
        ],
        popular: false,
        image: "/static/images/services/maintenance.jpg",
    },
    Service {
        id: "transmission-service",
        category: ServiceCategory::Transmission,
        icon: "gear",
        title: "Transmission Service",
        description: "Fluid exchanges, shift problems and clutch replacement for automatic, manual and CVT transmissions.",
        duration: "2-5 hours",
        price: "From $179",
        features: &[
            "Fluid and filter service",
            "Shift quality diagnosis",
            "Clutch replacement",
        ],
        popular: false,
        image: "/static/images/services/transmission.jpg",
    },
    Service {
        id: "electrical-systems",
        category: ServiceCategory::Electrical,
        icon: "bolt",
        title: "Electrical Systems",
        description: "Starting and charging problems, parasitic drains, lighting and wiring faults traced to the source.",
        duration: "1-3 hours",
        price: "From $129",
        features: &[
            "Starter and alternator testing",
            "Parasitic draw testing",
            "Wiring repair",
        ],
        popular: false,
        image: "/static/images/services/electrical.jpg",
    },
    Service {
        id: "battery-replacement",
        category: ServiceCategory::Electrical,
        icon: "battery",
        title: "Battery Replacement",
        description: "Load-tested batteries installed with terminal cleaning and a charging system check.",
        duration: "20-30 minutes",
        price: "From $139",
        features: &["Free battery load test", "Terminal cleaning", "3-year warranty"],
        popular: false,
        image: "/static/images/services/battery.jpg",
    },
    Service {
        id: "tire-alignment",
        category: ServiceCategory::Tires,
        icon: "tire",
        title: "Tires & Wheel Alignment",
        description: "Mounting, balancing, rotation and four-wheel computer alignment to stop pulling and uneven wear.",
        duration: "1-2 hours",
        price: "From $99",
        features: &[
            "Four-wheel alignment",
            "Road-force balancing",
            "Tire rotation",
            "Before and after printout",
        ],
        popular: false,
        image: "/static/images/services/tires.jpg",
    },
    Service {
        id: "ac-heating",
        category: ServiceCategory::Climate,
        icon: "snowflake",
        title: "A/C & Heating",
        description: "Leak detection, recharge and component repair for air conditioning, plus heater core and blower service.",
        duration: "1-3 hours",
        price: "From $119",
        features: &[
            "Refrigerant leak detection",
            "System evacuation and recharge",
            "Blower and blend door repair",
        ],
        popular: false,
        image: "/static/images/services/climate.jpg",
    },
];

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "maria-accord",
        author: "Maria Gonzales",
        role: "2016 Honda Accord owner",
        text: "They found a cracked coolant hose two other shops missed. Honest quote, done the same day, and they showed me the old part.",
        rating: stars(5),
        image: "/static/images/testimonials/maria.jpg",
        service: Some("check-engine-diagnostics"),
        date: date(2024, 9, 14),
    },
    Testimonial {
        id: "derek-f150",
        author: "Derek Owens",
        role: "2018 Ford F-150 owner",
        text: "Brakes were grinding on my way to work. They fit me in that morning and had me back on the road by lunch.",
        rating: stars(5),
        image: "/static/images/testimonials/derek.jpg",
        service: Some("brake-service"),
        date: date(2024, 11, 2),
    },
    Testimonial {
        id: "priya-outback",
        author: "Priya Raman",
        role: "2015 Subaru Outback owner",
        text: "Head gasket job came in under the estimate. Car runs better than when I bought it.",
        rating: stars(5),
        image: "/static/images/testimonials/priya.jpg",
        service: Some("engine-repair"),
        date: date(2025, 1, 20),
    },
    Testimonial {
        id: "tom-fleet",
        author: "Tom Becker",
        role: "Fleet manager, Becker Landscaping",
        text: "We run six trucks through them for scheduled maintenance. Clear records, no upselling, fair prices.",
        rating: stars(4),
        image: "/static/images/testimonials/tom.jpg",
        service: Some("scheduled-maintenance"),
        date: None,
    },
];

static HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        id: "expert-repair",
        title: "Expert Auto Repair",
        subtitle: "ASE-certified technicians",
        description: "Honest diagnostics and quality repairs for every make and model, backed by a 24-month warranty.",
        image: "/static/images/hero/shop-floor.jpg",
        features: &["Free estimates", "Same-day service", "24-month warranty"],
        cta: CallToAction {
            label: "Book an Appointment",
            href: "/appointment",
        },
    },
    HeroSlide {
        id: "brake-special",
        title: "Stop With Confidence",
        subtitle: "Complete brake service",
        description: "Pads, rotors and fluid with a free brake inspection on every visit.",
        image: "/static/images/hero/brakes.jpg",
        features: &["Free inspection", "Quality pads and rotors", "Road tested"],
        cta: CallToAction {
            label: "See Brake Services",
            href: "/services?category=brakes",
        },
    },
    HeroSlide {
        id: "maintenance",
        title: "Keep It Running",
        subtitle: "Scheduled maintenance",
        description: "Factory-schedule maintenance that keeps your warranty valid and your car out of the shop.",
        image: "/static/images/hero/maintenance.jpg",
        features: &["Manufacturer schedules", "Digital inspection reports", "Loaner cars available"],
        cta: CallToAction {
            label: "View All Services",
            href: "/services",
        },
    },
];

static SITE_PROFILE: SiteProfile = SiteProfile {
    name: "Gearbox Auto Repair",
    tagline: "Honest repairs. Fair prices. Done right the first time.",
    founded: 2008,
    phone: "(555) 214-8830",
    email: "service@gearboxauto.example",
    address: Address {
        street: "1420 Industrial Way",
        city: "Springfield",
        region: "OR",
        postal_code: "97477",
        country: "US",
    },
    hours: &[
        OpeningHours {
            days: "Monday - Friday",
            schema_days: "Mo-Fr",
            opens: Some("08:00"),
            closes: Some("18:00"),
        },
        OpeningHours {
            days: "Saturday",
            schema_days: "Sa",
            opens: Some("09:00"),
            closes: Some("14:00"),
        },
        OpeningHours {
            days: "Sunday",
            schema_days: "Su",
            opens: None,
            closes: None,
        },
    ],
    socials: &[
        SocialLink {
            network: "Facebook",
            url: "https://www.facebook.com/gearboxauto",
        },
        SocialLink {
            network: "Instagram",
            url: "https://www.instagram.com/gearboxauto",
        },
        SocialLink {
            network: "Yelp",
            url: "https://www.yelp.com/biz/gearbox-auto-repair-springfield",
        },
    ],
    stats: &[
        Stat {
            value: "15+",
            label: "Years in business",
        },
        Stat {
            value: "12,000+",
            label: "Vehicles repaired",
        },
        Stat {
            value: "8",
            label: "ASE-certified technicians",
        },
        Stat {
            value: "4.9",
            label: "Average customer rating",
        },
    ],
    commitments: &[
        "Written estimates before any work begins",
        "Old parts returned on request",
        "24-month / 24,000-mile parts and labor warranty",
        "Free shuttle within five miles",
    ],
    seo: SeoDefaults {
        title: "Gearbox Auto Repair | Trusted Auto Repair in Springfield, OR",
        description: "ASE-certified auto repair in Springfield, OR. Engine, brakes, diagnostics, maintenance and more with honest estimates and a 24-month warranty.",
        keywords: &[
            "auto repair",
            "car repair Springfield",
            "brake service",
            "engine repair",
            "oil change",
            "check engine light",
        ],
        image: "/static/images/og-default.svg",
    },
};

/// All services, in catalog order.
#[must_use]
pub fn services() -> &'static [Service] {
    SERVICES
}

/// All testimonials.
#[must_use]
pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

/// Landing page hero slides, in display order.
#[must_use]
pub fn hero_slides() -> &'static [HeroSlide] {
    HERO_SLIDES
}

/// The business profile.
#[must_use]
pub fn site_profile() -> &'static SiteProfile {
    &SITE_PROFILE
}
