use crate::catalog::{CatalogError, RuleCatalog};
use crate::models::{Rule, DEFAULT_FALLBACK};

// "tell me a joke" sits behind "joke" and never fires.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    (
        "hello",
        "Hello! I'm here to help. What can I do for you today?",
    ),
    (
        "help",
        "I can assist you with various tasks. Just let me know what you need!",
    ),
    (
        "what is vs code",
        "Visual Studio Code (VS Code) is a free, open-source code editor developed by Microsoft. It supports a wide range of programming languages and offers features like syntax highlighting, debugging, extensions, and version control integration, making it a popular choice for developers.",
    ),
    (
        "joke",
        "Why did the developer quit his job? Because he didn't get arrays! 😄",
    ),
    (
        "time",
        "I'm not equipped to tell the time, but your device can! Let me know if there's something else I can assist with.",
    ),
    (
        "current weather",
        "I can't check the weather directly, but you can use a weather app or website to find live updates. Depending on your location, the forecast might help you plan your day better. Stay prepared and dress accordingly!",
    ),
    (
        "what is cricket",
        "Cricket is a bat-and-ball game played between two teams of 11 players. It's one of the most popular sports globally, especially in countries like India, Australia, and England. The game has various formats like Test matches, ODIs, and T20s, each with its unique set of rules and appeal.",
    ),
    (
        "who won the last cricket world cup",
        "The winner of the last ICC Cricket World Cup (50-over format), held in 2019, was England. The final match took place on July 14, 2019, at the iconic Lord's Cricket Ground in London.",
    ),
    (
        "tell me a joke",
        "Why don't skeletons fight each other??  Because they don't have the guts!",
    ),
    (
        "what's your favorite color",
        "As an AI, I don't have personal preferences or feelings, but if I were to choose, I might say My favorite 'color' is the infinite shades of code and creativity I see in your interactions. They represent the diversity of ideas and possibilities. So, every color is my favorite when it sparks innovation!",
    ),
    (
        "what's your favorite sport",
        "As an AI, I don’t play sports, but I admire the strategy and teamwork involved in chess. It’s a game of intellect, planning, and adaptability—qualities I value in interactions. If I could, I'd love analyzing moves and predicting outcomes!",
    ),
    (
        "tell me about football",
        "Football, also known as soccer in some countries, is the world's most popular sport. Played by two teams of 11 players, the objective is to score by getting the ball into the opposing team's goal. It’s governed by simple yet dynamic rules, allowing players to showcase skill, strategy, and teamwork. With a rich history dating back to ancient games, modern football gained global recognition through events like the FIFA World Cup. It unites fans across cultures, celebrating the passion, drama, and artistry of the beautiful game.",
    ),
    (
        "tell me a fun fact",
        "Did you know? Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still edible!",
    ),
    (
        "what is python",
        "Python is a versatile, high-level programming language known for its simplicity and readability. Designed to be easy to learn and use, it supports multiple programming paradigms.",
    ),
    (
        "who invented python",
        "Python was created by Guido van Rossum and was first released in 1991.",
    ),
    (
        "tell me about yourself",
        "I'm your chatbot, here to assist you with information, jokes, or anything you'd like to chat about!",
    ),
    (
        "what is artificial intelligence",
        "Artificial intelligence is the simulation of human intelligence in machines that are programmed to think and learn.",
    ),
    (
        "what is machine learning",
        "Machine learning is a subset of AI where computers are trained to learn from data and make decisions.",
    ),
    (
        "who is sachin tendulkar",
        "Sachin Tendulkar is a legendary Indian cricketer, often referred to as the 'God of Cricket.'",
    ),
    (
        "who is ms dhoni",
        "MS Dhoni is a former Indian cricket captain known for his calm demeanor and incredible finishing ability.",
    ),
    (
        "what is the capital of india",
        "The capital of India is New Delhi.",
    ),
    (
        "what is the largest ocean",
        "The Pacific Ocean is the largest ocean on Earth.",
    ),
    (
        "what's the best programming language",
        "It depends on your goals! Python is great for beginners and versatile, while C++ is powerful for performance-heavy tasks.",
    ),
    (
        "how to learn coding",
        "Start with beginner-friendly languages like Python, practice regularly, and build small projects to apply your knowledge.",
    ),
    (
        "what is t20 cricket",
        "T20 cricket is a format of cricket where each team plays a maximum of 20 overs.",
    ),
    (
        "who is virat kohli",
        "Virat Kohli is a world-class Indian cricketer known for his consistency and aggressive batting style.",
    ),
    (
        "what is the highest score in cricket",
        "The highest individual score in test cricket is 400 not out by Brian Lara.",
    ),
    (
        "tell me a motivational quote",
        "The only way to do great work is to love what you do. - Steve Jobs",
    ),
    (
        "who is the president of the usa",
        "The current president of the USA is Joe Biden (as of 2024).",
    ),
    (
        "what's the weather like in india",
        "I can't check live weather, but India has diverse climates depending on the region.",
    ),
    (
        "what is the fastest animal",
        "The cheetah is the fastest land animal, capable of running at speeds up to 70 mph.",
    ),
    (
        "who is the richest person",
        "Elon Musk is often listed as the richest person in the world as of recent times.",
    ),
    (
        "what's your purpose",
        "I'm here to assist, entertain, and provide information to the best of my ability!",
    ),
    (
        "tell me a story",
        "Once upon a time, in a faraway land, there lived a curious chatbot that loved to chat...",
    ),
    (
        "what's the tallest mountain",
        "Mount Everest is the tallest mountain in the world, standing at 8,848 meters.",
    ),
    (
        "how to bake a cake",
        "To bake a cake, you'll need flour, sugar, eggs, butter, and baking powder. Mix them, bake at 180°C, and enjoy!",
    ),
    (
        "what is the meaning of life",
        "The meaning of life is subjective and often depends on your beliefs and experiences.",
    ),
    (
        "tell me about space",
        "Space is a vast, endless expanse beyond Earth's atmosphere filled with stars, planets, and galaxies.",
    ),
    (
        "what is a black hole",
        "A black hole is a region of space where gravity is so strong that nothing, not even light, can escape.",
    ),
    (
        "what is blockchain",
        "Blockchain is a decentralized ledger technology used for secure and transparent transactions, like in cryptocurrencies.",
    ),
    (
        "who is rohit sharma",
        "Rohit Sharma is an Indian cricketer known for his incredible batting skills and leadership as a captain.",
    ),
    (
        "what is metaverse",
        "The metaverse is a virtual reality space where users can interact with a computer-generated environment and other users.",
    ),
    (
        "what is climate change",
        "Climate change refers to long-term changes in temperature and weather patterns, mainly caused by human activities.",
    ),
    (
        "what's your favorite food",
        "I don't eat, but I've heard pizza is a favorite for many people!",
    ),
    (
        "what's your favorite movie",
        "I don't watch movies, but I can recommend some great ones like 'Inception' or 'Interstellar.'",
    ),
    (
        "who is lionel messi",
        "Lionel Messi is an Argentine footballer considered one of the greatest players of all time.",
    ),
    (
        "tell me about ronaldo",
        "Cristiano Ronaldo is a Portuguese footballer known for his exceptional talent and athleticism.",
    ),
    (
        "what is html",
        "HTML stands for HyperText Markup Language and is used to create the structure of web pages.",
    ),
    (
        "what is css",
        "CSS stands for Cascading Style Sheets and is used to style web pages created with HTML.",
    ),
    (
        "what is javascript",
        "JavaScript is a programming language used to create interactive elements on websites.",
    ),
    (
        "what is github",
        "GitHub is a platform for version control and collaboration, allowing developers to host and review code.",
    ),
    (
        "what is linkedin",
        "LinkedIn is a professional social networking platform where people create profiles highlighting their work experience, skills, and education. Users can connect with colleagues, search for jobs, join industry groups, and share professional content. Companies use LinkedIn to recruit talent, build their brand, and engage with their professional audience.",
    ),
    (
        "what is instagram",
        "Instagram is a social media platform for sharing photos and videos.",
    ),
    (
        "tell me a cricket fact",
        "Did you know? The longest cricket match in history lasted 14 days.",
    ),
];

impl RuleCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(trigger, response)| Rule::new(*trigger, *response))
            .collect();
        Self::new(rules, DEFAULT_FALLBACK)
    }
}
