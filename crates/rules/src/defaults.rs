//! Built-in lookup tables used when a lexicon document leaves a table unset.

pub const STOPWORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Pronouns
    "i", "me", "my", "mine", "myself",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself",
    "she", "her", "hers", "herself",
    "it", "its", "itself",
    "we", "us", "our", "ours", "ourselves",
    "they", "them", "their", "theirs", "themselves",
    "this", "that", "these", "those",
    "who", "whom", "whose", "which", "what",
    // Prepositions
    "about", "above", "across", "after", "against", "along", "amid", "among",
    "around", "at", "before", "behind", "below", "beneath", "beside", "besides",
    "between", "beyond", "by", "concerning", "despite", "down", "during",
    "except", "for", "from", "in", "inside", "into", "like", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "regarding",
    "round", "since", "through", "throughout", "to", "toward", "towards",
    "under", "underneath", "until", "unto", "up", "upon", "with", "within", "without",
    // Conjunctions
    "and", "but", "or", "nor", "so", "yet", "as", "if", "then", "than",
    "because", "while", "where", "when", "whenever", "wherever", "whether",
    // Auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "would", "should", "could", "might", "may", "must", "shall", "will", "can",
    // Adverbs
    "very", "really", "quite", "rather", "somewhat", "more", "most", "much",
    "many", "some", "any", "enough", "all", "both", "each", "every", "few",
    "little", "less", "least", "other", "another", "such", "no", "not", "only",
    "own", "same", "too", "just", "now", "here", "there", "always",
    "never", "sometimes", "often", "seldom", "again", "ever", "still", "already",
    "even", "once", "twice", "thrice",
    // Numbers
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    // Filler
    "um", "uh", "er", "ah", "okay", "ok", "yeah", "well", "actually", "basically",
    "literally", "totally", "sort", "kind", "type", "thing", "stuff", "etc",
    // Time
    "today", "yesterday", "tomorrow", "day", "week", "month", "year",
    "morning", "afternoon", "evening", "night", "time", "date",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december",
    // Question words
    "why", "how", "done",
    // Money words too common in financial diaries to discriminate
    "money", "financial", "finance", "dollar", "dollars", "cent", "cents",
    "spend", "spent", "spending", "buy", "bought", "buying", "purchase", "purchased", "purchasing",
    "pay", "paid", "paying", "payment", "payments", "cost", "costs", "costing",
    "price", "prices", "pricing", "expense", "expenses", "expensive",
    "cheap", "cheapest", "affordable", "budget", "budgeting", "save", "saved", "saving", "savings",
];

/// Tokens kept through stopword removal because they flip polarity.
pub const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "nor"];

/// Whole-token contractions, checked before the suffix rules.
pub const WORD_CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("shan't", "shall not"),
    ("ain't", "is not"),
];

/// Token-final contractions, checked in order.
pub const SUFFIX_CONTRACTIONS: &[(&str, &str)] = &[
    ("n't", "not"),
    ("'re", "are"),
    ("'s", "is"),
    ("'d", "would"),
    ("'ll", "will"),
    ("'ve", "have"),
    ("'m", "am"),
];

pub const POSITIVE_MOOD: &[&str] = &[
    "happy", "excited", "good", "great", "excellent", "joy", "pleased", "satisfied",
    "content", "delighted", "optimistic", "confident", "proud",
];

pub const NEGATIVE_MOOD: &[&str] = &[
    "sad", "unhappy", "bad", "terrible", "awful", "miserable", "disappointed", "upset",
    "frustrated", "angry", "annoyed", "irritated", "depressed",
];

pub const ANXIOUS_MOOD: &[&str] = &[
    "worried", "anxious", "nervous", "stressed", "overwhelmed", "concerned", "fear",
    "afraid", "panic", "uneasy", "apprehensive", "tense", "dread",
];

pub const FINANCIAL_TASKS: &[&str] = &[
    "bank", "banking", "account", "accounts", "balance", "bill", "bills", "paid", "pay",
    "paying", "payment", "payments", "budget", "budgeting", "savings", "transfer",
    "transferred", "credit card", "debit card", "loan", "loans", "debt", "invest",
    "invested", "investment", "tax", "taxes", "rent", "mortgage", "salary", "paycheck",
    "invoice", "statement",
];

pub const SHOPPING_TASKS: &[&str] = &[
    "shop", "shopping", "shopped", "store", "stores", "groceries", "grocery", "supermarket",
    "bought", "buy", "buying", "purchase", "purchased", "order", "ordered", "amazon", "mall",
    "cart", "checkout", "retail",
];

pub const PLANNING_TASKS: &[&str] = &[
    "plan", "plans", "planned", "planning", "schedule", "scheduled", "goal", "goals",
    "calendar", "organize", "organized", "prepare", "prepared", "to do list", "reminder",
    "next month", "next week", "forecast",
];

pub const RESEARCH_TASKS: &[&str] = &[
    "research", "researched", "compare", "compared", "comparing", "comparison", "review",
    "reviews", "looked up", "look up", "search", "searched", "googled", "read about",
    "investigate", "options", "recommendation", "recommendations",
];

pub const TRANSPORTATION_TASKS: &[&str] = &[
    "car", "bus", "train", "subway", "metro", "uber", "lyft", "taxi", "fuel", "gas station",
    "petrol", "commute", "commuting", "parking", "drive", "drove", "driving", "flight",
    "ticket", "tickets", "transit",
];

/// Substring indicators of friction or a problem in the described task.
pub const PAIN_INDICATORS: &[&str] = &[
    "frustrat", "annoy", "difficult", "hard to", "confus", "problem", "issue", "struggl",
    "stuck", "fail", "error", "too slow", "took forever", "too expensive", "overcharg",
    "hidden fee", "late fee", "hate", "worst", "cannot", "could not", "unable",
    "impossible", "complicated", "overwhelm", "waste", "broken", "declined", "mistake",
    "forgot",
];

/// Phrase pattern → cluster theme name, first match wins.
pub const THEMES: &[(&str, &str)] = &[
    ("check balance", "Account Monitoring"),
    ("check account", "Account Monitoring"),
    ("pay bill", "Bill Payments"),
    ("transfer money", "Money Transfers"),
    ("save money", "Saving Behavior"),
    ("budget", "Budgeting"),
    ("invest", "Investment Activity"),
    ("spend", "Spending Behavior"),
    ("purchase", "Purchase Decisions"),
    ("shop", "Shopping Behavior"),
    ("shopping", "Shopping Behavior"),
    ("stress", "Financial Stress"),
    ("worry", "Financial Anxiety"),
    ("anxious", "Financial Anxiety"),
    ("happy", "Financial Satisfaction"),
    ("proud", "Financial Achievement"),
    ("regret", "Purchase Regret"),
    ("app", "Digital Financial Tools"),
    ("bank", "Banking Activity"),
    ("credit card", "Credit Card Usage"),
    ("loan", "Loan Management"),
    ("debt", "Debt Management"),
    ("bill", "Bill Payments"),
    ("bills", "Bill Payments"),
    ("transfer", "Money Transfers"),
    ("groceries", "Grocery Shopping"),
    ("grocery", "Grocery Shopping"),
    ("supermarket", "Grocery Shopping"),
    ("coffee", "Coffee & Cafes"),
    ("cafe", "Coffee & Cafes"),
    ("restaurant", "Dining Out"),
    ("dinner", "Dining Out"),
    ("lunch", "Dining Out"),
    ("fuel", "Fuel Expenses"),
    ("petrol", "Fuel Expenses"),
    ("travel", "Travel Expenses"),
    ("plan", "Financial Planning"),
    ("goal", "Financial Goals"),
];

pub const POSITIVE_EMOTIONS: &[&str] = &[
    "happy", "glad", "satisfied", "proud", "excited", "good", "great", "excellent", "love",
];

pub const NEGATIVE_EMOTIONS: &[&str] = &[
    "sad", "frustrated", "angry", "upset", "disappointed", "bad", "terrible", "hate", "regret",
];

pub const ANXIOUS_EMOTIONS: &[&str] = &[
    "anxious", "worried", "nervous", "stressed", "concerned", "fear", "afraid", "uncertain",
];

pub const NEUTRAL_EMOTIONS: &[&str] = &["ok", "fine", "neutral", "normal", "average", "typical"];
