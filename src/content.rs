// Copy and figures shown across the site.

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat { value: 350, suffix: "+", label: "Businesses Trust Us" },
    Stat { value: 500, suffix: "+", label: "Projects Completed" },
    Stat { value: 98, suffix: "%", label: "Client Satisfaction" },
    Stat { value: 15, suffix: "+", label: "Years of Experience" },
];

pub const IMPACT_METRICS: [Stat; 4] = [
    Stat { value: 100, suffix: "+", label: "Years of combined industry experience" },
    Stat { value: 15, suffix: "+", label: "Industries served across India" },
    Stat { value: 500, suffix: "+", label: "Campaigns delivered across platforms" },
    Stat { value: 5, suffix: "+", label: "Years of consistent brand growth" },
];

pub const STATS_DURATION_MS: u32 = 2_000;
pub const IMPACT_DURATION_MS: u32 = 2_500;

// (title, short description, long description)
pub const SERVICES: [(&str, &str, &str); 9] = [
    ("Brand Strategy & Positioning", "Defining your brand essence", "Identity, purpose, tone, and differentiation."),
    ("Creative & Visual Design", "Stunning visual experiences", "Logos, brand systems, campaigns, and creatives."),
    ("Digital Marketing", "Data-driven growth campaigns", "SEO, PPC, social media, and performance campaigns."),
    ("Web & Technology", "Scalable digital solutions", "Websites, landing pages, and digital experiences."),
    ("360° Marketing", "Omnichannel strategies", "Print, outdoor, electronic, and integrated campaigns."),
    ("Events & Exhibitions", "Memorable brand experiences", "On-ground activations and immersive brand experiences."),
    ("Content & Production", "Compelling visual storytelling", "Photography, videography, reels, and campaign films."),
    ("Analytics & Optimization", "Measurable results", "Insights, tracking, and continuous improvement."),
    ("Merchandise & Brand Assets", "Premium brand collateral", "Custom apparel, giveaways, and branded merchandise."),
];

pub const PROCESS_STEPS: [(&str, &str, &str); 3] = [
    ("01", "Discovery & Consultation", "We dive deep into understanding your business, goals, target audience, and competitive landscape to create a strategic foundation."),
    ("02", "Design & Development", "Our creative team crafts compelling strategies and executes stunning designs that bring your vision to life with precision."),
    ("03", "Launch & Growth", "We deploy your project with excellence and provide ongoing optimization to ensure sustained growth and success."),
];

pub const PILLARS: [(&str, &str); 3] = [
    ("Strategy First", "Every decision backed by insight, research, and clarity."),
    ("Creative Excellence", "Ideas that inspire, engage, and elevate perception."),
    ("Results That Matter", "Execution focused on growth, reach, and ROI."),
];

pub const PRINCIPLES: [&str; 4] = [
    "Strategy before creativity",
    "Data before assumptions",
    "Impact over impressions",
    "Long-term growth over short-term wins",
];

pub const FEATURED_BRANDS: [&str; 6] = [
    "Paras Dairy",
    "Amar Ujala",
    "India TV",
    "Koffelo",
    "Porter",
    "PTC Network",
];

// (client, industry, what we did)
pub const CASE_STUDIES: [(&str, &str, &str); 6] = [
    ("Paras Dairy", "FMCG", "Retail visibility and festive campaigns across North India."),
    ("Amar Ujala", "Media", "Reader engagement drives and on-ground brand activations."),
    ("India TV", "Media", "Event production and promotional creatives for flagship shows."),
    ("Koffelo", "Lifestyle", "Brand identity, packaging and social launch."),
    ("Porter", "Logistics", "Performance marketing and driver-partner outreach."),
    ("PTC Network", "Media", "Integrated 360° campaigns across print, outdoor and digital."),
];

pub const CLIENTS: [&str; 35] = [
    "HP", "Airtel", "Amar Ujala", "ASSOCHAM", "Axis Bank", "Bacardi", "Bajaj", "Dabur",
    "DLF", "Google", "H&M", "Hindustan Times", "Hotstar", "India TV", "Indian Oil", "Isuzu",
    "Jeep", "Kotak", "Lamaar", "LG", "Nissan", "Oral-B", "Mountain Dew", "PTC Punjabi",
    "Radio City", "Red Bull", "Samsung", "Shell", "Sony", "Toyota", "Vivo", "Wildthing",
    "Zee", "Paras", "Porter",
];

pub const CLIENT_REASONS: [&str; 4] = [
    "Transparent collaboration",
    "Strong strategic foundation",
    "Consistent delivery",
    "Results-driven mindset",
];

// (name, role)
pub const TEAM: [(&str, &str); 7] = [
    ("Soman Nandy", "CTO"),
    ("Siddharth Biswas", "CEO"),
    ("Shailin Bardhan", "Creative Head"),
    ("Neithal Rajpurohit", "Frontend Developer"),
    ("Jeet Kumar", "Event Manager"),
    ("Kripal Singh", "Graphic Designer"),
    ("Ali Raza", "Digital Marketing"),
];

pub const FAQS: [(&str, &str); 6] = [
    ("What does Boop Org do?", "Boop Org is a 360° creative and marketing agency that helps brands grow through strategy, design, marketing, and execution across digital, offline, and on-ground platforms."),
    ("What industries do you work with?", "We work across FMCG, Media, Technology, Logistics, Retail, Lifestyle, Events, and Services, delivering tailored solutions for each industry."),
    ("Do you provide end-to-end marketing solutions?", "Yes. From brand strategy and creative design to digital marketing, exhibitions, events, production, and analytics, we offer complete end-to-end solutions."),
    ("Do you work with startups or only established brands?", "Absolutely. We work with startups, SMEs, and large enterprises, adapting our approach based on brand size, objectives, and market stage."),
    ("How soon can we start a project?", "We can typically kick off projects within 1-2 weeks, depending on discovery and project complexity. Reach out to discuss your timeline."),
    ("Do you offer customized packages?", "Yes, we offer fully customized packages tailored to your brand's needs, budget, and goals. Let's talk about what works best for you."),
];
