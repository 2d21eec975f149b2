//! Persona archetypes keyed by `"{primary}-{secondary}"` color pairs.

/// `(key, name, description)` for every documented archetype.
pub(crate) static PERSONA_TABLE: &[(&str, &str, &str)] = &[
    ("Blue-Maroon", "Champion", "Champions are driven by growth, being frontrunners, and overcoming challenges. They are the first to battle on behalf of the needs, rights, and honor of others..."),
    ("Blue-Green", "Captain", "Captains are driven by growth, being frontrunners, and by a quest for the unknown. They wield immense influence along each step of a journey..."),
    ("Blue-Orange", "Director", "Directors are driven by growth, being frontrunners, and by self-expression and artistry. They are both boldly self-assured and ambiguous when translating their creative vision..."),
    ("Blue-Pink", "Producer", "Producers are driven by growth, being frontrunners, and by experience, elegance, and beauty in all its forms. They bring forth timeless ideas and concepts..."),
    ("Blue-Purple", "Mentor", "Mentors are driven by growth, being frontrunners, and by a need to compassionately care for others. They are known for their capacity as wise and trusted guides..."),
    ("Blue-Red", "Coach", "Coaches are driven by growth and being frontrunners, and a desire to excite others. With boundless reserves of enthusiasm, they train and push others..."),
    ("Blue-Silver", "Maverick", "Mavericks are driven by growth, being frontrunners, and by a desire to challenge the establishment. They are independent thinkers who seek to set their own agenda..."),
    ("Blue-Yellow", "Visionary", "Visionaries are driven by growth, being frontrunners, and by a need to innovate. They possess foresight, imagination, and the ambition to bring their insights to life..."),
    ("Blue-Beige", "Achiever", "Blue Achievers can be found at the front of any effort heading toward victory. While most might buckle under the pressure to succeed..."),
    ("Maroon-Blue", "Contender", "Contenders are driven to overcome challenges and by growth and being frontrunners. They demonstrate natural ability and grit, persist in the face of difficulties..."),
    ("Maroon-Green", "Pioneer", "Pioneers are driven to overcome challenges and by the quest for the unknown. They are comfortable embarking into wild and uncharted regions..."),
    ("Maroon-Orange", "Maker", "Makers are driven to overcome challenges and by self-expression and artistry. They are hands-on in their ideas, taking what is abstract and creating something tangible..."),
    ("Maroon-Pink", "Precisionist", "Precisionists are driven to overcome challenges and by experience, elegance, and beauty in all forms. They are uncompromising and disciplined..."),
    ("Maroon-Purple", "Protector", "Protectors are driven to overcome challenges and by a compassionate need to care for others. They are staunch advocates of justice..."),
    ("Maroon-Red", "Energizer", "Energizers are driven to overcome challenges and by a desire to entertain and cause others to get excited. Their endless resolve and abundant enthusiasm..."),
    ("Maroon-Silver", "Dark Horse", "Dark Horses are driven to overcome challenges and by a desire to disrupt the norm and challenge the establishment. They have a healthy disdain for age-old cultural systems..."),
    ("Maroon-Yellow", "Challenger", "Challengers are driven to overcome obstacles and by a need to invent the future through innovation. They boldly and defiantly reframe potential hurdles..."),
    ("Maroon-Beige", "Competitor", "Maroon Competitors are the consummate engines that work hard and persevere to achieve. Defined by their intense determination, resilience against obstacles..."),
    ("Green-Blue", "Trailblazer", "Trailblazers are driven by the quest for the unknown and by growth and being frontrunners. They are explorers at heart as they courageously break new ground..."),
    ("Green-Maroon", "Adventurer", "Adventurers are driven by the quest for the unknown and by a need to overcome challenges. They feel a rush and exhilaration amid new opportunities and encounters..."),
    ("Green-Orange", "Seeker", "Seekers are driven by the quest for the unknown and by self-expression through artistry. They chase after wisdom, answers, and truth..."),
    ("Green-Pink", "Detective", "Detectives are driven by the quest for the unknown and by experience, elegance, and beauty in all forms. Natural investigators, they subject themselves..."),
    ("Green-Purple", "Ambassador", "Ambassadors are driven by the quest for the unknown and by a need to compassionately care for others. People entrust their personal stories and information..."),
    ("Green-Red", "Globetrotter", "Globetrotters are driven by the quest for the unknown and a desire to cause others to get excited. They consider the world and its people a treasure trove..."),
    ("Green-Silver", "Ranger", "Rangers are driven by the quest for the unknown and by a desire to challenge the establishment. They are not afraid of controversy..."),
    ("Green-Yellow", "Researcher", "Researchers are driven by the quest for the unknown and by a need to invent the future through innovation. They are devoted to the scholarly practices of inquiry..."),
    ("Green-Beige", "Explorer", "Green Explorers are spirited adventurers who are constantly exploring and questioning the world around them. Their insatiable curiosity dives deep..."),
    ("Orange-Blue", "Architect", "Architects are driven by self-expression and artistry and by growth and being frontrunners. Their intelligent foresight and carefully contrived plans..."),
    ("Orange-Maroon", "Artisan", "Artisans are driven by self-expression and a need to overcome challenges. They are devoted to their trade or craft and delight in bringing a plan or concept to life..."),
    ("Orange-Green", "Searcher", "Searchers are driven by self-expression and artistry and by the quest for the unknown. They believe that only the examined life is worth living..."),
    ("Orange-Pink", "Composer", "Composers are driven by self-expression and artistry and by experience, elegance, and beauty in all forms. They approach the act of creation..."),
    ("Orange-Purple", "Curator", "Curators are driven to express themselves through artistry and by a need to compassionately care for others. They seek novel and creative ways of doing things..."),
    ("Orange-Red", "Storyteller", "Storytellers are driven by self-expression and artistry and by a desire to cause others to get excited. They bring audiences together..."),
    ("Orange-Silver", "Nonconformist", "Nonconformists are driven by self-expression and artistry and by a desire to challenge the establishment. Their need to radically speak their truth..."),
    ("Orange-Yellow", "Ideator", "Ideators are driven by self-expression and artistry and by a need to innovate. They long to imagine and conceive of ingenious ideas..."),
    ("Orange-Beige", "Creator", "Orange Creators make up the world’s creative class because they are so imaginative, self-expressive, and intensely original. They are motivated by bringing new ideas..."),
    ("Pink-Blue", "Connoisseur", "Connoisseurs are driven by experience, elegance, and beauty in all forms, and by growth and being frontrunners. They have a sophisticated and discerning palate..."),
    ("Pink-Maroon", "Perfectionist", "Perfectionists are driven by experience, elegance, and beauty in all forms and by a need to overcome challenges. Their exacting standards for excellence..."),
    ("Pink-Green", "Philosopher", "Philosophers are driven by experience, elegance, and beauty in all forms and by the quest for the unknown. They are abstract thinkers who seek wisdom..."),
    ("Pink-Orange", "Virtuoso", "Virtuosos are driven by experience, elegance, and beauty in all forms and by self-expression and artistry. Their dazzling skill holds others spellbound..."),
    ("Pink-Purple", "Idealist", "Idealists are driven by experience, elegance, and beauty in all forms and by a need to compassionately care for others. They hold fast to a vision..."),
    ("Pink-Red", "Aficionado", "Aficionados are driven by experience, elegance, and beauty in all forms, and by a desire to cause others to get excited. They pursue their passions..."),
    ("Pink-Silver", "Refiner", "Refiners are driven by experience, elegance, and beauty in all forms and by a desire to challenge the establishment. They approach all pursuits intending to purify..."),
    ("Pink-Yellow", "Trendsetter", "Trendsetters are driven by experience, elegance, and beauty in all forms and by a need to invent the future through innovation. They dream up novel ideas..."),
    ("Pink-Beige", "Sophisticate", "Pink Sophisticates are a group’s connoisseurs with a refined palate and penchant for all that is excellent. They are experiential and at times even ethereal..."),
    ("Purple-Blue", "Guide", "Guides are driven by a need to compassionately care for others and by growth and being frontrunners. They are a motivating force whose influence..."),
    ("Purple-Maroon", "Guardian", "Guardians are driven by a need to compassionately care for others and by a resolve to overcome challenges. They believe that everyone matters equally..."),
    ("Purple-Green", "Shepherd", "Shepherds are driven by a need to compassionately care for others and by the quest for the unknown. They guide, guard, and watch over others..."),
    ("Purple-Orange", "Patron", "Patrons are driven by a need to compassionately care for others and by expressing themselves through artistry. They empower others to bring their creative dreams to life..."),
    ("Purple-Pink", "Confidant", "Confidants are driven by a need to compassionately care for others and by experience, elegance, and beauty in all its forms. They are the first that others turn to..."),
    ("Purple-Red", "Host", "Hosts are driven by a need to compassionately care for others and by a desire to cause others to get excited. They exemplify hospitality in their actions..."),
    ("Purple-Silver", "Advocate", "Advocates are driven by a need to compassionately care for others and by a desire to challenge the establishment. They selflessly support and promote the interests..."),
    ("Purple-Yellow", "Advisor", "Advisors are driven by a need to compassionately care for others and by a need to invent the future through innovation. People tend to flock to Advisors..."),
    ("Purple-Beige", "Provider", "A world without Purple Providers is one no one would want to endure. Purple Providers are selfless, compassionate, and naturally put the needs of others first..."),
    ("Red-Blue", "Motivator", "Motivators are driven to entertain and excite others and by growth and being frontrunners. They possess compelling charisma and charm..."),
    ("Red-Maroon", "Dynamo", "Dynamos are driven to cause others to get excited and by a need to overcome challenges. They are forceful and energetic individuals who are not shy..."),
    ("Red-Green", "Thrill-seeker", "Thrill-seekers are driven to cause others to get excited and by the quest for the unknown. They purposefully seek out and enjoy risk-laden activities..."),
    ("Red-Orange", "Performer", "Performers are driven to cause others to get excited and by self-expression and artistry. They are most engaged when in front of an audience..."),
    ("Red-Pink", "Enthusiast", "Enthusiasts are driven to cause others to get excited and by experience, elegance, and beauty in all forms. They are ardent supporters of people and causes..."),
    ("Red-Purple", "Emcee", "Emcees are driven to entertain and excite others and by a compassionate need to care for others. They draw energy and inspiration from the people around them..."),
    ("Red-Silver", "Daredevil", "Daredevils are driven to cause others to get excited and by a desire to challenge the establishment. They are reckless, bold, and pursue activities..."),
    ("Red-Yellow", "Magician", "Magicians are driven to entertain and cause others to get excited and by a need to innovate. They make incredible things happen, tapping into boundless potential..."),
    ("Red-Beige", "Entertainer", "Red Entertainers elevate the daily mundane to something more vibrant, more sensational, and simply more fun. They generate excitement and enjoyment..."),
    ("Silver-Blue", "Ringleader", "Ringleaders are driven to challenge the establishment and by growth and being frontrunners. They are natural activators and inspire others to rally..."),
    ("Silver-Maroon", "Instigator", "Instigators are driven to disrupt the norm and by a need to overcome challenges. They cause others to question even their most sacred beliefs..."),
    ("Silver-Green", "Rogue", "Rogues are driven to challenge the establishment and by the quest for the unknown. They get lost in their own thoughts as they probe ideas..."),
    ("Silver-Orange", "Renegade", "Renegades are driven to challenge the establishment and by self-expression and artistry. They reject lawful and conventional behavior..."),
    ("Silver-Pink", "Individualist", "Individualists are driven to challenge the establishment and by experience, elegance, and beauty in all forms. They are quite comfortable pursuing independent courses..."),
    ("Silver-Purple", "Activist", "Activists are driven to challenge the establishment and by a need to compassionately care for others. They support bold and brazen action..."),
    ("Silver-Red", "Rock Star", "Rock Stars are driven to challenge the establishment and by a desire to entertain. Due to their commanding presence, star reputation..."),
    ("Silver-Yellow", "Free-thinker", "Free-thinkers are driven to challenge the establishment and by a need to innovate. Happily at home within their own thoughts, they are prone to speculate..."),
    ("Silver-Beige", "Rebel", "Without a doubt the most polarizing Archetype of them all, Silver Rebels are rule-breakers, system fighters, activists, and daredevils who refuse to conform..."),
    ("Yellow-Blue", "Vanguard", "Vanguards are driven to invent the future through innovation and by growth and being frontrunners. Always at the forefront of new concepts..."),
    ("Yellow-Maroon", "Inventor", "Inventors are driven to innovate and by a need to overcome challenges. They tirelessly toil to devise the new and novel. They take an ingenious approach..."),
    ("Yellow-Green", "Theorist", "Theorists are driven to invent the future through innovation and by the quest for the unknown. They form astonishing opinions and theories..."),
    ("Yellow-Orange", "Originator", "Originators are driven to innovation, self-expression, and artistry. Their imaginative and creative tendencies lead them to inventive ideas..."),
    ("Yellow-Pink", "Dreamer", "Dreamers are driven to innovate and by experience, elegance, and beauty in all forms. With heads often in the clouds, they are quite content to muse..."),
    ("Yellow-Purple", "Oracle", "Oracles are driven to innovate and by a need to compassionately care for others. Oracles have been gifted with the rare gift of foresight..."),
    ("Yellow-Red", "Futurist", "Futurists are driven to invent the future and by a desire to cause others to get excited. Their zest and zeal for life is strongest when thinking about the future..."),
    ("Yellow-Silver", "Reformer", "Reformers are driven to innovate and by a desire to challenge the establishment. They work for and advocate change, even if it flies in the face of established wisdom..."),
    ("Yellow-Beige", "Innovator", "Yellow Innovators are an instrumental—and sometimes rare—asset to any group, society, or culture. These are the individuals that need to invent, transform..."),
];
