//! The in-source content lists the store is seeded from at startup. Editing
//! the festival programme or the sponsor roster means editing these vectors
//! and redeploying; there is no admin surface.

use uuid::Uuid;

use entity::prelude::*;

pub fn events() -> Vec<EventEntity> {
    vec![
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "overclock-hackathon".to_string(),
            title: "Overclock".to_string(),
            category: "hackathon".to_string(),
            date: "October 9-10, 2026".to_string(),
            team_size: "2-4".to_string(),
            difficulty: "All levels".to_string(),
            location: "Innovation Wing, Block C".to_string(),
            summary: "The flagship 36-hour build marathon: ship anything, \
                      demo everything."
                .to_string(),
            description: Some(
                "Teams get power, wifi, floor space and an unreasonable \
                 amount of snacks for a day and a half. Mentors from the \
                 sponsor booths float between tables all night, and the \
                 top eight demos go on the main stage before closing."
                    .to_string(),
            ),
            prize_pool: Some("$3,000".to_string()),
            max_teams: Some(120),
            duration: Some("36 hours".to_string()),
            assets: Some(vec![
                "/assets/events/overclock-stage.jpg".to_string(),
                "/assets/events/overclock-floor.jpg".to_string(),
            ]),
            registration_link: Some(
                "https://forms.novafest.dev/overclock".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "null-pointer-ctf".to_string(),
            title: "Null Pointer CTF".to_string(),
            category: "security".to_string(),
            date: "October 10, 2026".to_string(),
            team_size: "1-3".to_string(),
            difficulty: "Intermediate".to_string(),
            location: "Networks Lab, Block A".to_string(),
            summary: "Jeopardy-style capture the flag across web, pwn, \
                      crypto and forensics."
                .to_string(),
            description: Some(
                "Twenty-four challenges released in three waves. Bring your \
                 own laptop; the scoreboard freezes for the final hour."
                    .to_string(),
            ),
            prize_pool: Some("$1,200".to_string()),
            max_teams: Some(80),
            duration: Some("8 hours".to_string()),
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/null-pointer".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "botwars".to_string(),
            title: "BotWars".to_string(),
            category: "robotics".to_string(),
            date: "October 10-11, 2026".to_string(),
            team_size: "2-5".to_string(),
            difficulty: "Advanced".to_string(),
            location: "Main Arena".to_string(),
            summary: "Sumo bots in a knockout bracket, 3kg class, homebuilt \
                      only."
                .to_string(),
            description: Some(
                "Weigh-in and tech inspection happen Saturday morning. \
                 Double elimination, best of three rounds per match, full \
                 arena rules published on the event page."
                    .to_string(),
            ),
            prize_pool: Some("$2,000".to_string()),
            max_teams: Some(32),
            duration: None,
            assets: Some(vec![
                "/assets/events/botwars-arena.jpg".to_string(),
            ]),
            registration_link: Some(
                "https://forms.novafest.dev/botwars".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "circuit-rush".to_string(),
            title: "Circuit Rush".to_string(),
            category: "hardware".to_string(),
            date: "October 9, 2026".to_string(),
            team_size: "1-2".to_string(),
            difficulty: "Beginner".to_string(),
            location: "Electronics Lab".to_string(),
            summary: "Breadboard a working circuit from a mystery parts bin \
                      against the clock."
                .to_string(),
            description: None,
            prize_pool: None,
            max_teams: Some(60),
            duration: Some("3 hours".to_string()),
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/circuit-rush".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "prompt-craft".to_string(),
            title: "Prompt Craft".to_string(),
            category: "ai".to_string(),
            date: "October 11, 2026".to_string(),
            team_size: "1-2".to_string(),
            difficulty: "All levels".to_string(),
            location: "Seminar Hall 2".to_string(),
            summary: "Coax a fixed model through a gauntlet of reasoning \
                      and generation tasks."
                .to_string(),
            description: Some(
                "Everyone gets the same model, the same token budget and \
                 the same scoring harness. Leaderboard updates live."
                    .to_string(),
            ),
            prize_pool: Some("$800".to_string()),
            max_teams: None,
            duration: Some("4 hours".to_string()),
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/prompt-craft".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "code-relay".to_string(),
            title: "Code Relay".to_string(),
            category: "programming".to_string(),
            date: "October 9, 2026".to_string(),
            team_size: "3".to_string(),
            difficulty: "Intermediate".to_string(),
            location: "Computer Centre".to_string(),
            summary: "Competitive programming where teammates rotate at the \
                      keyboard every ten minutes."
                .to_string(),
            description: None,
            prize_pool: Some("$900".to_string()),
            max_teams: Some(45),
            duration: Some("5 hours".to_string()),
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/code-relay".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "pixel-jam".to_string(),
            title: "Pixel Jam".to_string(),
            category: "design".to_string(),
            date: "October 9-11, 2026".to_string(),
            team_size: "1-3".to_string(),
            difficulty: "All levels".to_string(),
            location: "Design Studio".to_string(),
            summary: "A weekend game-and-art jam around a theme revealed at \
                      the opening ceremony."
                .to_string(),
            description: Some(
                "Any engine, any medium. Entries are exhibited in the \
                 studio on Sunday afternoon and the crowd votes."
                    .to_string(),
            ),
            prize_pool: Some("$600".to_string()),
            max_teams: None,
            duration: Some("48 hours".to_string()),
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/pixel-jam".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "pitch-orbit".to_string(),
            title: "Pitch Orbit".to_string(),
            category: "entrepreneurship".to_string(),
            date: "October 11, 2026".to_string(),
            team_size: "1-4".to_string(),
            difficulty: "All levels".to_string(),
            location: "Auditorium".to_string(),
            summary: "Seven minutes on stage in front of a panel of \
                      founders and sponsor CTOs."
                .to_string(),
            description: Some(
                "Slides optional, live demos encouraged. The panel picks \
                 three teams for follow-up incubation calls."
                    .to_string(),
            ),
            prize_pool: Some("$1,500 seed grant".to_string()),
            max_teams: Some(25),
            duration: None,
            assets: None,
            registration_link: Some(
                "https://forms.novafest.dev/pitch-orbit".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "drone-grand-prix".to_string(),
            title: "Drone Grand Prix".to_string(),
            category: "robotics".to_string(),
            date: "October 11, 2026".to_string(),
            team_size: "2-4".to_string(),
            difficulty: "Advanced".to_string(),
            location: "Open Grounds".to_string(),
            summary: "FPV quads through an inflatable gate course, fastest \
                      three laps win."
                .to_string(),
            description: None,
            prize_pool: Some("$1,000".to_string()),
            max_teams: Some(24),
            duration: None,
            assets: Some(vec![
                "/assets/events/drone-course.jpg".to_string(),
            ]),
            registration_link: Some(
                "https://forms.novafest.dev/drone-gp".to_string(),
            ),
        },
        EventEntity {
            id: Uuid::new_v4().to_string(),
            slug: "retro-game-night".to_string(),
            title: "Retro Game Night".to_string(),
            category: "gaming".to_string(),
            date: "October 10, 2026".to_string(),
            team_size: "1-2".to_string(),
            difficulty: "All levels".to_string(),
            location: "Student Lounge".to_string(),
            summary: "CRTs, cartridges and a bracket nobody takes too \
                      seriously."
                .to_string(),
            description: None,
            prize_pool: None,
            max_teams: None,
            duration: Some("3 hours".to_string()),
            assets: None,
            registration_link: None,
        },
    ]
}

pub fn sponsors() -> Vec<SponsorEntity> {
    vec![
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Helios Cloud".to_string(),
            tier: "platinum".to_string(),
            logo: Some("/assets/sponsors/helios-cloud.svg".to_string()),
            website: Some("https://helioscloud.example.com".to_string()),
            description: Some(
                "Compute credits for every hackathon team and the \
                 festival's hosting bill."
                    .to_string(),
            ),
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Quantabyte".to_string(),
            tier: "platinum".to_string(),
            logo: Some("/assets/sponsors/quantabyte.svg".to_string()),
            website: Some("https://quantabyte.example.com".to_string()),
            description: Some(
                "Developer tooling company and headline sponsor of the \
                 Overclock main stage."
                    .to_string(),
            ),
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "ForgeWorks Robotics".to_string(),
            tier: "gold".to_string(),
            logo: Some("/assets/sponsors/forgeworks.svg".to_string()),
            website: Some("https://forgeworks.example.com".to_string()),
            description: Some(
                "Supplies the BotWars arena and the spare-parts counter."
                    .to_string(),
            ),
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Nimbus Analytics".to_string(),
            tier: "gold".to_string(),
            logo: Some("/assets/sponsors/nimbus.svg".to_string()),
            website: Some("https://nimbusanalytics.example.com".to_string()),
            description: None,
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Lumen Labs".to_string(),
            tier: "gold".to_string(),
            logo: Some("/assets/sponsors/lumen-labs.svg".to_string()),
            website: Some("https://lumenlabs.example.com".to_string()),
            description: Some(
                "Runs the recruiting lounge; bring a resume."
                    .to_string(),
            ),
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "ByteBrew Coffee".to_string(),
            tier: "silver".to_string(),
            logo: Some("/assets/sponsors/bytebrew.svg".to_string()),
            website: Some("https://bytebrew.example.com".to_string()),
            description: Some(
                "Free refills for anyone wearing a participant badge."
                    .to_string(),
            ),
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Stackline Books".to_string(),
            tier: "silver".to_string(),
            logo: Some("/assets/sponsors/stackline.svg".to_string()),
            website: Some("https://stacklinebooks.example.com".to_string()),
            description: None,
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "Orbit Mobility".to_string(),
            tier: "silver".to_string(),
            logo: Some("/assets/sponsors/orbit-mobility.svg".to_string()),
            website: None,
            description: None,
        },
        SponsorEntity {
            id: Uuid::new_v4().to_string(),
            name: "PixelPress Printing".to_string(),
            tier: "silver".to_string(),
            logo: Some("/assets/sponsors/pixelpress.svg".to_string()),
            website: Some("https://pixelpress.example.com".to_string()),
            description: None,
        },
    ]
}
