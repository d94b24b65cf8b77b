//! Canonical prakriti question bank.
//!
//! Each question offers one option per dosha; the chosen option's tag is
//! what the quiz session records. The presentation layer renders the
//! prompts and option texts verbatim.

use crate::models::Dosha;

/// One selectable option: display text plus the dosha it scores toward.
#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub text: &'static str,
    pub dosha: Dosha,
}

/// A single quiz question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [QuizOption; 3],
}

/// The full question bank, in presentation order.
pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "How would you describe your body frame?",
        options: [
            QuizOption { text: "Thin and light, I find it hard to gain weight", dosha: Dosha::Vata },
            QuizOption { text: "Medium and muscular build", dosha: Dosha::Pitta },
            QuizOption { text: "Broad and solid, I gain weight easily", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How is your skin most of the time?",
        options: [
            QuizOption { text: "Dry, rough, or cold to the touch", dosha: Dosha::Vata },
            QuizOption { text: "Warm, reddish, prone to irritation", dosha: Dosha::Pitta },
            QuizOption { text: "Smooth, oily, and cool", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "Which best describes your hair?",
        options: [
            QuizOption { text: "Dry, frizzy, or brittle", dosha: Dosha::Vata },
            QuizOption { text: "Fine, straight, early greying or thinning", dosha: Dosha::Pitta },
            QuizOption { text: "Thick, wavy, and lustrous", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How is your appetite?",
        options: [
            QuizOption { text: "Irregular, I sometimes forget to eat", dosha: Dosha::Vata },
            QuizOption { text: "Strong, I get irritable when hungry", dosha: Dosha::Pitta },
            QuizOption { text: "Steady but mild, I can skip meals easily", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How do you usually sleep?",
        options: [
            QuizOption { text: "Light and interrupted, my mind races", dosha: Dosha::Vata },
            QuizOption { text: "Sound but short, I wake up alert", dosha: Dosha::Pitta },
            QuizOption { text: "Deep and long, waking up is hard", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "What weather bothers you most?",
        options: [
            QuizOption { text: "Cold, windy, and dry weather", dosha: Dosha::Vata },
            QuizOption { text: "Hot and humid weather", dosha: Dosha::Pitta },
            QuizOption { text: "Cool, damp, and cloudy weather", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How do you react under stress?",
        options: [
            QuizOption { text: "Anxious, worried, or restless", dosha: Dosha::Vata },
            QuizOption { text: "Irritable, impatient, or critical", dosha: Dosha::Pitta },
            QuizOption { text: "Withdrawn, slow, or resistant to change", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How is your memory?",
        options: [
            QuizOption { text: "Quick to learn, quick to forget", dosha: Dosha::Vata },
            QuizOption { text: "Sharp and precise", dosha: Dosha::Pitta },
            QuizOption { text: "Slow to learn, but I never forget", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "What is your usual pace of activity?",
        options: [
            QuizOption { text: "Fast and energetic in bursts", dosha: Dosha::Vata },
            QuizOption { text: "Purposeful and goal-driven", dosha: Dosha::Pitta },
            QuizOption { text: "Steady, calm, and unhurried", dosha: Dosha::Kapha },
        ],
    },
    Question {
        prompt: "How is your digestion?",
        options: [
            QuizOption { text: "Variable, with gas or bloating", dosha: Dosha::Vata },
            QuizOption { text: "Strong, occasionally acidic", dosha: Dosha::Pitta },
            QuizOption { text: "Slow and heavy after meals", dosha: Dosha::Kapha },
        ],
    },
];
