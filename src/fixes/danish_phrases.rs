/*!
 * Danish phrases in which a lowercase "i" is the pronoun "I" (you, plural).
 *
 * Each entry is a regular expression where a plain space stands for any run
 * of spaces and line breaks. The list is hand curated data and should be
 * reviewed by a native speaker before entries are removed or reworded.
 */

pub const DANISH_I_PHRASES: &[&str] = &[
    r", i ved nok\b",
    r", i ved, ",
    r", i ved.",
    r", i ikke blev\b",
    r"\b i føler at\b",
    r"\badvarede i os\b",
    r"\badvarede i dem\b",
    r"\bat i aldrig\b",
    r"\bat i alle bliver\b",
    r"\bat i alle er\b",
    r"\bat i alle forventer\b",
    r"\bat i alle gør\b",
    r"\bat i alle har\b",
    r"\bat i alle ved\b",
    r"\bat i alle vil\b",
    r"\bat i bare\b",
    r"\bat i bager\b",
    r"\bat i bruger\b",
    r"\bat i dræber\b",
    r"\bat i dræbte\b",
    r"\bat i fandt\b",
    r"\bat i fik\b",
    r"\bat i finder\b",
    r"\bat i forstår\b",
    r"\bat i får\b",
    r"\b[Aa]t i hver især\b",
    r"\bAt i ikke\b",
    r"\bat i ikke\b",
    r"\bat i kom\b",
    r"\bat i kommer\b",
    r"\bat i næsten er\b",
    r"\bat i næsten fik\b",
    r"\bat i næsten har\b",
    r"\bat i næsten skulle\b",
    r"\bat i næsten var\b",
    r"\bat i også får\b",
    r"\bat i også gør\b",
    r"\bat i også mener\b",
    r"\bat i også siger\b",
    r"\bat i også tror\b",
    r"\bat i rev\b",
    r"\bat i river\b",
    r"\bat i samarbejder\b",
    r"\bat i snakkede\b",
    r"\bat i scorer\b",
    r"\bat i siger\b",
    r"\bat i skal\b",
    r"\bat i skulle\b",
    r"\bat i to ikke\b",
    r"\bat i to siger\b",
    r"\bat i to har\b",
    r"\bat i to er\b",
    r"\bat i to bager\b",
    r"\bat i to skal\b",
    r"\bat i to gør\b",
    r"\bat i to får\b",
    r"\bat i udnyttede\b",
    r"\bat i udnytter\b",
    r"\bat i vil\b",
    r"\bat i ville\b",
    r"\bBehandler i mig\b",
    r"\bbehandler i mig\b",
    r"\bbliver i rige\b",
    r"\bbliver i ikke\b",
    r"\bbliver i indkvarteret\b",
    r"\bbliver i indlogeret\b",
    r"\bburde i gøre\b",
    r"\bburde i ikke\b",
    r"\bburde i købe\b",
    r"\bburde i løbe\b",
    r"\bburde i se\b",
    r"\bburde i sige\b",
    r"\bburde i tage\b",
    r"\bDa i ankom\b",
    r"\bda i ankom\b",
    r"\bda i forlod\b",
    r"\bDa i forlod\b",
    r"\bda i fik\b",
    r"\bDa i fik\b",
    r"\bDa i gik\b",
    r"\bda i gik\b",
    r"\bda i kom\b",
    r"\bDa i kom\b",
    r"\bda i så ",
    r"\bDa i så ",
    r"\bdet får i\b",
    r"\bDet får i\b",
    r"\bDet har i\b",
    r"\bdet har i\b",
    r"\bDet må i ",
    r"\bdet må i ",
    r"\bend i aner\b",
    r"\bend i tror\b",
    r"\bend i ved\b",
    r"\ber i alle\b",
    r"\bEr i alle\b",
    r"\ber i allerede\b",
    r"\bEr i allerede\b",
    r"\ber i allesammen\b",
    r"\bEr i allesammen\b",
    r"\ber i der\b",
    r"\bEr i der\b",
    r"\bEr i fra\b",
    r"\bEr i gennem\b",
    r"\ber i gennem\b",
    r"\ber i glade\b",
    r"\bEr i glade\b",
    r"\bEr i gået\b",
    r"\ber i gået\b",
    r"\ber i her\b",
    r"\bEr i her\b",
    r"\ber i imod\b",
    r"\bEr i imod\b",
    r"\ber i klar\b",
    r"\bEr i klar\b",
    r"\bEr i mætte\b",
    r"\ber i mætte\b",
    r"\bEr i med\b",
    r"\ber i med\b",
    r"\ber i mod\b",
    r"\bEr i mod\b",
    r"\ber i okay\b",
    r"\bEr i okay\b",
    r"\ber i på\b",
    r"\bEr i på\b",
    r"\bEr i parate\b",
    r"\ber i parate\b",
    r"\ber i sikker\b",
    r"\bEr i sikker\b",
    r"\bEr i sikre\b",
    r"\ber i sikre\b",
    r"\ber i skøre\b",
    r"\bEr i skøre\b",
    r"\ber i stadig\b",
    r"\bEr i stadig\b",
    r"\bEr i sultne\b",
    r"\ber i sultne\b",
    r"\bEr i tilfredse\b",
    r"\ber i tilfredse\b",
    r"\bEr i to\b",
    r"\ber i ved at\b",
    r"\ber i virkelig\b",
    r"\bEr i virkelig\b",
    r"\bEr i vågne\b",
    r"\ber i vågne\b",
    r"\bfanden vil i?",
    r"\bfor ser i\b",
    r"\bFor ser i\b",
    r"\bFordi i ventede\b",
    r"\bfordi i ventede\b",
    r"\bFordi i deltog\b",
    r"\bfordi i deltog\b",
    r"\bforhandler i stadig\b",
    r"\bForhandler i stadig\b",
    r"\bforstår i\b",
    r"\bForstår i\b",
    r"\bFør i får\b",
    r"\bfør i får\b",
    r"\bFør i kommer\b",
    r"\bfør i kommer\b",
    r"\bFør i tager\b",
    r"\bfør i tager\b",
    r"\bfår i alle\b",
    r"\bfår i fratrukket\b",
    r"\bfår i ikke\b",
    r"\bfår i klø\b",
    r"\bfår i point\b",
    r"\bgider i at\b",
    r"\bGider i at\b",
    r"\bGider i ikke\b",
    r"\bgider i ikke\b",
    r"\bgider i lige\b",
    r"\bGider i lige\b",
    r"\b[Gg]ik i lige\b",
    r"\b[Gg]ik i hjem\b",
    r"\b[Gg]ik i over\b",
    r"\b[Gg]ik i forbi\b",
    r"\b[Gg]ik i ind\b",
    r"\b[Gg]ik i uden\b",
    r"\bGjorde i det\b",
    r"\bGjorde i det\b",
    r"\bgjorde i ikke\b",
    r"\bGider i godt\b",
    r"\bgider i godt\b",
    r"\bGider i ikke\b",
    r"\bgider i ikke\b",
    r"\b[Gg]iver i mig\b",
    r"\bglor i på\b",
    r"\bGlor i på\b",
    r"\bGår i ind\b",
    r"\bgår i ind\b",
    r"\b[Gg]å i bare\b",
    r"\bHørte i det\b",
    r"\bhørte i det\b",
    r"\bHar i \b",
    r"\bhar i ødelagt\b",
    r"\bhar i fået\b",
    r"\bHar i fået\b",
    r"\bHar i det\b",
    r"\bhar i det\b",
    r"\bhar i gjort\b",
    r"\bhar i ikke\b",
    r"\bHar i nogen\b",
    r"\bhar i nogen\b",
    r"\bHar i nok\b",
    r"\bhar i nok\b",
    r"\bhar i ordnet\b",
    r"\bHar i ordnet\b",
    r"\bhar i spist\b",
    r"\bHar i spist\b",
    r"\bhar i tænkt\b",
    r"\bhar i tabt\b",
    r"\bhelvede vil i?",
    r"\bHer har i\b",
    r"\bher har i\b",
    r"\bHvad fanden har i\b",
    r"\bhvad fanden har i\b",
    r"\bHvad fanden tror i\b",
    r"\bhvad fanden tror i\b",
    r"\bhvad fanden vil i\b",
    r"\bHvad fanden vil i\b",
    r"\bHvad gør i\b",
    r"\bhvad gør i\b",
    r"\bhvad har i\b",
    r"\bHvad har i\b",
    r"\bHvad i ikke\b",
    r"\bhvad i ikke\b",
    r"\b[Hh]vad laver i\b",
    r"\b[Hh]vad lavede i\b",
    r"\b[Hh]vad mener i\b",
    r"\b[Hh]vad siger i\b",
    r"\b[Hh]vad skal i\b",
    r"\b[Hh]vad snakker i\b",
    r"\b[Hh]vad sløver i\b",
    r"\b[Hh]vad synes i\b",
    r"\b[Hh]vad vil i\b",
    r"\b[Hh]vem er i\b",
    r"\b[Hh]vem fanden tror i\b",
    r"\b[Hh]vem tror i\b",
    r"\b[Hh]vilken slags mennesker er i?",
    r"\b[Hh]vilken slags folk er i?",
    r"\b[Hh]vis i altså\b",
    r"\b[Hh]vis i bare\b",
    r"\b[Hh]vis i forstår\b",
    r"\b[Hh]vis i får\b",
    r"\b[Hh]vis i går\b",
    r"\b[Hh]vis i ikke\b",
    r"\b[Hh]vis i lovede\b",
    r"\b[Hh]vis i lover\b",
    r"\b[Hh]vis i overholder\b",
    r"\b[Hh]vis i overtræder\b",
    r"\b[Hh]vis i slipper\b",
    r"\b[Hh]vis i taber\b",
    r"\b[Hh]vis i vandt\b",
    r"\b[Hh]vis i vinder\b",
    r"\b[Hh]vor er i\b",
    r"\b[Hh]vor får i\b",
    r"\b[Hh]vor gamle er i\b",
    r"\b[Hh]vor i begyndte\b",
    r"\b[Hh]vor i startede\b",
    r"\b[Hh]vor skal i\b",
    r"\b[Hh]vor var i\b",
    r"\b[Hh]vordan har i\b",
    r"\b[Hh]vordan hørte i\b",
    r"\b[Hh]vordan i når\b",
    r"\b[Hh]vordan i nåede\b",
    r"\b[Hh]vordan kunne i\b",
    r"\b[Hh]vorfor afleverer i det\b",
    r"\b[Hh]vorfor gør i ",
    r"\b[Hh]vorfor gjorde i ",
    r"\b[Hh]vorfor græder i ",
    r"\b[Hh]vorfor har i ",
    r"\b[Hh]vorfor kom i ",
    r"\b[Hh]vorfor kommer i ",
    r"\b[Hh]vorfor løb i ",
    r"\b[Hh]vorfor lover i ",
    r"\b[Hh]vorfor lovede i ",
    r"\b[Hh]vorfor skal i\b",
    r"\b[Hh]vorfor skulle i\b",
    r"\b[Hh]vorfor sagde i\b",
    r"\b[Hh]vorfor synes i\b",
    r"\b[Hh]vornår gør i ",
    r"\bHvornår kom i\b",
    r"\b[Hh]vornår ville i ",
    r"\b[Hh]vornår giver i ",
    r"\b[Hh]vornår gav i ",
    r"\b[Hh]vornår rejser i\b",
    r"\b[Hh]vornår rejste i\b",
    r"\b[Hh]vornår skal i ",
    r"\b[Hh]vornår skulle i ",
    r"\b[Hh]ører i på\b",
    r"\b[Hh]ørte i på\b",
    r"\bi altid\b",
    r"\bi ankomme\b",
    r"\bi ankommer\b",
    r"\bi bare kunne\b",
    r"\bi bare havde\b",
    r"\bi bare gjorde\b",
    r"\bi begge er\b",
    r"\bi begge gør\b",
    r"\bi begge har\b",
    r"\bi begge var\b",
    r"\bi begge vil\b",
    r"\bi behøver ikke gemme\b",
    r"\bi behøver ikke prøve\b",
    r"\bi behøver ikke skjule\b",
    r"\bi behandlede\b",
    r"\bi behandler\b",
    r"\bi beskidte dyr\b",
    r"\bi blev\b",
    r"\bi blive\b",
    r"\bi bliver\b",
    r"\bi burde\b",
    r"\bi er\b",
    r"\bi fyrer af\b",
    r"\bi gør\b",
    r"\bi gav\b",
    r"\bi gerne ",
    r"\bi giver\b",
    r"\bi gjorde\b",
    r"\bi hører\b",
    r"\bi hørte\b",
    r"\bi har\b",
    r"\bi havde\b",
    r"\bi igen bliver\b",
    r"\bi igen burde\b",
    r"\bi igen finder\b",
    r"\bi igen gør\b",
    r"\bi igen kommer\b",
    r"\bi igen prøver\b",
    r"\bi igen siger\b",
    r"\bi igen skal\b",
    r"\bi igen vil\b",
    r"\bi ikke gerne\b",
    r"\bi ikke kan\b",
    r"\bi ikke kommer\b",
    r"\bi ikke vil\b",
    r"\bi kan\b",
    r"\bi kender\b",
    r"\bi kom\b",
    r"\bi komme\b",
    r"\bi kommer\b",
    r"\bi kunne\b",
    r"\bi morer jer\b",
    r"\bi må gerne\b",
    r"\bi må give\b",
    r"\bi må da\b",
    r"\bi nåede\b",
    r"\bi når\b",
    r"\bi prøve\b",
    r"\bi prøvede\b",
    r"\bi prøver\b",
    r"\bi sagde\b",
    r"\bi scorede\b",
    r"\bi ser\b",
    r"\bi set\b",
    r"\bi siger\b",
    r"\bi sikkert alle\b",
    r"\bi sikkert ikke gør\b",
    r"\bi sikkert ikke kan\b",
    r"\bi sikkert ikke vil\b",
    r"\bi skal\b",
    r"\bi skulle\b",
    r"\bi små stakler\b",
    r"\bi stopper\b",
    r"\bi synes\b",
    r"\bi troede\b",
    r"\bi tror\b",
    r"\bi var\b",
    r"\bi vel ikke\b",
    r"\bi vil\b",
    r"\bi ville\b",
    r"\b[Kk]an i lugte\b",
    r"\b[Kk]an i overleve\b",
    r"\b[Kk]an i spise\b",
    r"\b[Kk]an i se\b",
    r"\b[Kk]an i smage\b",
    r"\b[Kk]an i forstå\b",
    r"\b[Kk]ørte i hele\b",
    r"\b[Kk]ørte i ikke\b",
    r"\b[Kk]an i godt\b",
    r"\b[Kk]an i gøre\b",
    r"\b[Kk]an i huske\b",
    r"\b[Kk]an i ikke\b",
    r"\b[Kk]an i lide\b",
    r"\b[Kk]an i leve\b",
    r"\b[Kk]an i love\b",
    r"\b[Kk]an i måske\b",
    r"\b[Kk]an i nok\b",
    r"\b[Kk]an i se\b",
    r"\b[Kk]an i sige\b",
    r"\b[Kk]an i tilgive\b",
    r"\b[Kk]an i tygge\b",
    r"\b[Kk]an i to ikke\b",
    r"\b[Kk]an i tro\b",
    r"\bKender i ",
    r"\b[Kk]ender i hinanden\b",
    r"\b[Kk]ender i to hinanden\b",
    r"\bKendte i \b",
    r"\b[Kk]endte i hinanden\b",
    r"\b[Kk]iggede i på\b",
    r"\b[Kk]igger i på\b",
    r"\b[Kk]ommer i her\b",
    r"\b[Kk]ommer i ofte\b",
    r"\b[Kk]ommer i sammen\b",
    r"\b[Kk]ommer i tit\b",
    r"\b[Kk]unne i fortælle\b",
    r"\b[Kk]unne i give\b",
    r"\b[Kk]unne i gøre\b",
    r"\b[Kk]unne i ikke\b",
    r"\b[Kk]unne i lide\b",
    r"\b[Kk]unne i mødes\b",
    r"\b[Kk]unne i se\b",
    r"\b[Ll]eder i efter\b",
    r"\b[Ll]aver i ikke\b",
    r"\blaver i her\b",
    r"\bLover i\b",
    r"\b[Ll]øb i hellere\b",
    r"\b[Mm]ødte i ",
    r"\b[Mm]angler i en\b",
    r"\b[Mm]en i gutter\b",
    r"\b[Mm]en i drenge\b",
    r"\b[Mm]en i fyre\b",
    r"\b[Mm]ener i at\b",
    r"\b[Mm]ener i det\b",
    r"\b[Mm]ener i virkelig\b",
    r"\b[Mm]ens i sov\b",
    r"\b[Mm]ens i stadig\b",
    r"\b[Mm]ens i lå\b",
    r"\b[Mm]ister i point\b",
    r"\b[Mm]orer i jer\b",
    r"\b[Mm]å i alle",
    r"\b[Mm]å i gerne",
    r"\b[Mm]å i godt\b",
    r"\b[Mm]å i vide\b",
    r"\b[Mm]å i ikke",
    r"\b[Nn]u løber i\b",
    r"\b[Nn]u siger i\b",
    r"\b[Nn]u skal i\b",
    r"\b[Nn]år i\b",
    r"\b[Oo]m i ikke\b",
    r"\b[Oo]pgiver i\b",
    r"\b[Oo]vergiver i jer\b",
    r"\bpersoner i lukker\b",
    r"\b[Pp]as på i ikke\b",
    r"\b[Pp]as på i ikke\b",
    r"\b[Pp]å i ikke\b",
    r"\b[Pp]å at i ikke\b",
    r"\b[Ss]agde i ikke\b",
    r"\b[Ss]amlede i ham\b",
    r"\bSer i\b",
    r"\bSiger i\b",
    r"\b[Ss]ikker på i ikke\b",
    r"\b[Ss]ikre på i ikke\b",
    r"\b[Ss]kal i alle\b",
    r"\b[Ss]kal i allesammen\b",
    r"\b[Ss]kal i bare\b",
    r"\b[Ss]kal i dele\b",
    r"\b[Ss]kal i fordele\b",
    r"\b[Ss]kal i fordeles\b",
    r"\b[Ss]kal i gøre\b",
    r"\b[Ss]kal i have\b",
    r"\b[Ss]kal i ikke\b",
    r"\b[Ss]kal i klare\b",
    r"\b[Ss]kal i klatre\b",
    r"\b[Ss]kal i larme\b",
    r"\b[Ss]kal i lave\b",
    r"\b[Ss]kal i løfte\b",
    r"\b[Ss]kal i med\b",
    r"\b[Ss]kal i på\b",
    r"\b[Ss]kal i til\b",
    r"\b[Ss]kal i ud\b",
    r"\b[Ss]lap i ud\b",
    r"\b[Ss]lap i væk\b",
    r"\b[Ss]nart er i\b",
    r"\b[Ss]om i måske\b",
    r"\b[Ss]om i nok\b",
    r"\b[Ss]om i ved\b",
    r"\b[Ss]pis i bare\b",
    r"\b[Ss]pis i dem\b",
    r"\b[Ss]ynes i at\b",
    r"\b[Ss]ynes i det\b",
    r"\b[Ss]ynes i,",
    r"\b[Ss]ætter i en\b",
    r"\bSå i at\b",
    r"\bSå i det\b",
    r"\bSå i noget\b",
    r"\b[Ss]å tager i\b",
    r"\bTænder i på\b",
    r"\btænder i på\b",
    r"\btog i bilen\b",
    r"\bTog i bilen\b",
    r"\btog i liften\b",
    r"\bTog i liften\b",
    r"\btog i toget\b",
    r"\bTog i toget\b",
    r"\btræder i frem\b",
    r"\bTræder i frem\b",
    r"\bTror i at\b",
    r"\btror i at\b",
    r"\btror i det\b",
    r"\bTror i det\b",
    r"\bTror i jeg\b",
    r"\btror i jeg\b",
    r"\bTror i på\b",
    r"\b[Tr]ror i på\b",
    r"\b[Tr]ror i, ",
    r"\b[Vv]ar i blevet\b",
    r"\b[Vv]ed i alle\b",
    r"\b[Vv]ed i allesammen\b",
    r"\b[Vv]ed i er\b",
    r"\b[Vv]ed i ikke\b",
    r"\b[Vv]ed i hvad\b",
    r"\b[Vv]ed i hvem\b",
    r"\b[Vv]ed i hvor\b",
    r"\b[Vv]ed i hvorfor\b",
    r"\b[Vv]ed i hvordan\b",
    r"\b[Vv]ed i var\b",
    r"\b[Vv]ed i ville\b",
    r"\b[Vv]ed i har\b",
    r"\b[Vv]ed i havde\b",
    r"\b[Vv]ed i hvem\b",
    r"\b[Vv]ed i hvad\b",
    r"\b[Vv]ed i hvor\b",
    r"\b[Vv]ed i mente\b",
    r"\b[Vv]ed i tror\b",
    r"\b[Vv]enter i på\b",
    r"\b[Vv]il i besegle\b",
    r"\b[Vv]il i dræbe\b",
    r"\b[Vv]il i fortryde\b",
    r"\b[Vv]il i gerne\b",
    r"\b[Vv]il i godt\b",
    r"\b[Vv]il i have\b",
    r"\b[Vv]il i høre\b",
    r"\b[Vv]il i ikke\b",
    r"\b[Vv]il i købe\b",
    r"\b[Vv]il i kaste\b",
    r"\b[Vv]il i møde\b",
    r"\b[Vv]il i måske\b",
    r"\bvil i savne\b",
    r"\bVil i savne\b",
    r"\bvil i se\b",
    r"\bVil i se\b",
    r"\bvil i sikkert\b",
    r"\bvil i smage\b",
    r"\bVil i smage\b",
    r"\b[Vv]il i virkelig\b",
    r"\b[Vv]il i virkeligt\b",
    r"\bVil i være\b",
    r"\bvil i være\b",
    r"\bVille i blive\b",
    r"\bville i blive\b",
    r"\bville i dræbe\b",
    r"\bville i få\b",
    r"\bville i få\b",
    r"\bville i gøre\b",
    r"\bville i høre\b",
    r"\bville i ikke\b",
    r"\bville i kaste\b",
    r"\bville i komme\b",
    r"\bville i mene\b",
    r"\bville i nå\b",
    r"\bville i savne\b",
    r"\bVille i se\b",
    r"\bville i se\b",
    r"\bville i sikkert\b",
    r"\bville i synes\b",
    r"\bville i tage\b",
    r"\bville i tro\b",
    r"\bville i være\b",
    r"\bville i være\b",
    r"\bvover i\b",
];
