use pdf_lite::layout::{wrap, Section};

/// Approximate max chars per line for body text in Helvetica 11pt
/// within the content width.
pub const MAX_CHARS_BODY: usize = 90;
/// Bullet items wrap slightly narrower to leave room for the
/// two-character indent prefix.
pub const MAX_CHARS_BULLET: usize = 86;

/// The report content, in reading order.
pub fn sections() -> Vec<Section> {
    let what_it_is = "Practice Timer is a React/Vite web app for running practice sessions with \
                      Pomodoro-style work and break cycles, notifications, and PWA support. \
                      It focuses on reliable timing across desktop and mobile browsers, \
                      including iOS.";

    let features = vec![
        "Pomodoro-style work and break timer with customizable durations",
        "Iteration tracking across multiple work/break cycles",
        "Sound alerts when sessions complete",
        "Browser notifications for completion events",
        "PWA install support with service worker caching",
        "iOS background optimizations (background timer and wake-lock strategies)",
        "Dark mode and responsive layout for desktop and mobile",
    ];

    let how_it_works = vec![
        "UI: React app in `client/src` styled with Tailwind; entry point in `client/src/main.tsx`.",
        "State: Zustand store in `client/src/stores/timerStore.ts` holds timer state and settings.",
        "Timing: Web Worker in `client/src/workers/timerWorker.ts` drives ticks and completion messages.",
        "Background: Service worker `client/public/sw.js` caches assets and runs background sync/notifications; registered in `client/src/main.tsx`.",
        "Persistence: Settings stored in localStorage via `client/src/lib/localStorage.ts`.",
        "Data flow: UI -> Zustand store -> Web Worker -> store -> UI; store posts updates to service worker for background handling.",
    ];

    let how_to_run = vec![
        "Install Node.js v16+ (prerequisite from README).",
        "Run `npm install` from the repo root.",
        "Run `npm run dev` to start the Vite dev server.",
    ];

    vec![
        Section::Title("Practice Timer - App Summary".to_string()),
        Section::Paragraph {
            title: "What it is".to_string(),
            lines: wrap(what_it_is, MAX_CHARS_BODY),
        },
        Section::Paragraph {
            title: "Who it's for".to_string(),
            lines: vec!["Not found in repo.".to_string()],
        },
        Section::Bullets {
            title: "What it does".to_string(),
            items: features.into_iter().map(String::from).collect(),
        },
        Section::Bullets {
            title: "How it works".to_string(),
            items: how_it_works.into_iter().map(String::from).collect(),
        },
        Section::Bullets {
            title: "How to run".to_string(),
            items: how_to_run.into_iter().map(String::from).collect(),
        },
    ]
}
